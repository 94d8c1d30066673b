fn main() {
    cact_harness::cli::run();
}
