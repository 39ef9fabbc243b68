//! Build script for cufft-bridge-cuda.
//!
//! With the `cuda` feature, locates the CUDA toolkit and links libcufft.

fn main() {
    #[cfg(feature = "cuda")]
    {
        link_cufft();
    }
}

#[cfg(feature = "cuda")]
fn link_cufft() {
    use std::path::Path;

    // CUDA_PATH (Windows convention), then CUDA_HOME, then common locations
    let cuda_path = std::env::var("CUDA_PATH")
        .or_else(|_| std::env::var("CUDA_HOME"))
        .unwrap_or_else(|_| {
            ["/usr/local/cuda", "/opt/cuda", "/usr/lib/cuda"]
                .into_iter()
                .find(|path| Path::new(path).exists())
                .unwrap_or("/usr/local/cuda")
                .to_string()
        });

    let lib_dir = if cfg!(target_os = "windows") {
        format!("{}/lib/x64", cuda_path)
    } else {
        let lib64 = format!("{}/lib64", cuda_path);
        if Path::new(&lib64).exists() {
            lib64
        } else {
            format!("{}/lib", cuda_path)
        }
    };

    println!("cargo:rustc-link-search=native={}", lib_dir);
    println!("cargo:rustc-link-lib=cufft");
    println!("cargo:rerun-if-env-changed=CUDA_PATH");
    println!("cargo:rerun-if-env-changed=CUDA_HOME");
}
