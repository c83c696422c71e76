/// Principal recorded on posts saved from this machine when no author is
/// given on the command line.
pub fn local_principal() -> String {
    let name = whoami::username();
    if name.is_empty() {
        return whoami::realname();
    }
    name
}
