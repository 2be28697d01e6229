fn main() {
    if let Err(e) = admin_nav::run() {
        use colored::Colorize;
        eprintln!("{} {}", "error:".bright_red().bold(), e);
        std::process::exit(1);
    }
}
