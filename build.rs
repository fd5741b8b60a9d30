use vergen::EmitBuilder;

pub fn main() {
    if let Err(e) = EmitBuilder::builder()
        .build_timestamp()
        .git_sha(false)
        .cargo_target_triple()
        .rustc_semver()
        .rustc_host_triple()
        .rustc_llvm_version()
        .emit()
    {
        println!("cargo:warning=Unable to emit build info: {}", e);
    }
}
