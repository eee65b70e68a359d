fn main() {
    certify_command::run()
}
