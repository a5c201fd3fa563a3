#[cfg(target_os = "windows")]
mod windows_main;

#[cfg(target_os = "windows")]
fn main() {
    framemark::logging::init();
    windows_main::run();
}

#[cfg(not(target_os = "windows"))]
fn main() {
    eprintln!("framemark requires the Win32 layered window styles and only runs on Windows.");
    std::process::exit(1);
}
