fn main() {
    portfolio_lib::run();
}
