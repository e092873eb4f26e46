fn main() {
    dc::term::main();
}
