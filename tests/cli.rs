use std::ffi::OsStr;
use std::process::{Command, Output};

fn run<S: AsRef<OsStr>>(args: &[S]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_cgi-decode"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run cgi-decode")
}

#[test]
fn no_argument_prints_usage() {
    let out = run::<&str>(&[]);
    assert!(out.status.success());
    assert_eq!(out.stdout, b"Call: cgi-decode <argument>\n");
}

#[test]
fn too_many_arguments_prints_usage() {
    let out = run(&["a", "b"]);
    assert!(out.status.success());
    assert_eq!(out.stdout, b"Call: cgi-decode <argument>\n");
}

#[test]
fn decodes_argument() {
    let out = run(&["q=1+2%3D3"]);
    assert!(out.status.success());
    assert_eq!(
        String::from_utf8(out.stdout).unwrap(),
        "Try to decode q=1+2%3D3...\nDecoded:\nq=1 2=3"
    );
}

#[test]
fn hyphen_argument_is_not_a_flag() {
    let out = run(&["-a+b"]);
    assert!(out.status.success());
    assert_eq!(
        String::from_utf8(out.stdout).unwrap(),
        "Try to decode -a+b...\nDecoded:\n-a b"
    );
}

#[test]
fn malformed_escape_is_reported() {
    let out = run(&["abc%4"]);
    assert!(out.status.success());
    assert_eq!(
        String::from_utf8(out.stdout).unwrap(),
        "Try to decode abc%4...\n"
    );
    let stderr = String::from_utf8(out.stderr).unwrap();
    assert!(stderr.contains("malformed escape at byte offset 3"), "{}", stderr);
}

#[test]
fn double_dash_alone_is_decoded() {
    let out = run(&["--"]);
    assert!(out.status.success());
    assert_eq!(
        String::from_utf8(out.stdout).unwrap(),
        "Try to decode --...\nDecoded:\n--"
    );
}

#[test]
fn double_dash_counts_as_an_argument() {
    let out = run(&["--", "a+b"]);
    assert!(out.status.success());
    assert_eq!(out.stdout, b"Call: cgi-decode <argument>\n");
}

#[cfg(unix)]
#[test]
fn non_utf8_argument_is_decoded_as_bytes() {
    use std::ffi::OsString;
    use std::os::unix::ffi::OsStringExt;

    let arg = OsString::from_vec(b"\xff%41+".to_vec());
    let out = run(&[arg]);
    assert!(out.status.success());
    assert!(
        out.stdout.ends_with(b"Decoded:\n\xffA "),
        "{:?}",
        String::from_utf8_lossy(&out.stdout)
    );
}
