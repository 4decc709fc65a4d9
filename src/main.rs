fn main() {
    use cmake_projectgen::cli::parse;
    use cmake_projectgen::utils::logging;
    let cli = parse();
    logging::init(cli.verbose, cli.quiet);
    let code = cmake_projectgen::app::run_cli(cli);
    if code != 0 {
        std::process::exit(code);
    }
}
