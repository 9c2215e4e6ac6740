fn main() {
    // The engine under test is linked here. QFEED_TARGET_SRC names its C
    // sources (colon-separated); unset, the bundled stand-in is compiled so
    // the harness builds and tests on its own.
    let sources = std::env::var("QFEED_TARGET_SRC")
        .map(|v| v.split(':').map(String::from).collect::<Vec<_>>())
        .unwrap_or_else(|_| vec!["ctarget/stub_target.c".to_string()]);

    let mut build = cc::Build::new();
    build
        .opt_level(2)
        .warnings(true)
        .flag_if_supported("-Wextra")
        .include("ctarget");
    for src in &sources {
        build.file(src);
        println!("cargo:rerun-if-changed={src}");
    }

    // Enable sanitizers for the target when Rust is also compiled with them.
    // Usage: RUSTFLAGS="-Zsanitizer=address" cargo +nightly test
    //   or:  QFEED_SANITIZE=address cargo +nightly test
    let sanitizer = std::env::var("QFEED_SANITIZE").ok().or_else(|| {
        let flags = std::env::var("CARGO_ENCODED_RUSTFLAGS").unwrap_or_default();
        flags
            .split('\x1f')
            .find(|f| f.starts_with("-Zsanitizer="))
            .map(|f| f.trim_start_matches("-Zsanitizer=").to_string())
    });
    if let Some(san) = sanitizer {
        for s in san.split(',') {
            build.flag(format!("-fsanitize={s}"));
        }
        build.flag("-fno-omit-frame-pointer");
    }

    build.compile("qfeed_target");

    println!("cargo:rerun-if-env-changed=QFEED_TARGET_SRC");
    println!("cargo:rerun-if-changed=ctarget/qfeed_target.h");
}
