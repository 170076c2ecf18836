fn main() {
    voltig::run_cli();
}
