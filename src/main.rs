fn main() {
    mkgen::app::cli::run();
}
