// File: crates/vitals-core/build.rs
// Summary: Links the Windows system library Skia's font manager needs.

fn main() {
    #[cfg(target_os = "windows")]
    {
        // Skia's font manager reads the registry (RegOpenKeyExW and friends).
        println!("cargo:rustc-link-lib=advapi32");
    }
}
