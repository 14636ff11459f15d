// Copyright Catalog Contributors
// SPDX-License-Identifier: Apache-2.0

fn main() {
    // Get protoc path
    let protoc_path = protoc_bin_vendored::protoc_bin_path().unwrap();

    // export PROTOC to the environment
    unsafe {
        #[allow(clippy::disallowed_methods)]
        std::env::set_var("PROTOC", protoc_path);
    }

    // The generated src/gen/catalog.v1.rs is committed to the repository.
    // When building from a published package (where the proto file is
    // unavailable) the pre-generated file is used as-is and this build
    // script skips proto compilation.
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").unwrap();
    let proto_file = std::path::Path::new(&manifest_dir).join("proto/v1/catalog.proto");

    if !proto_file.exists() {
        // Published package: rely on the pre-generated src/gen/ file.
        return;
    }

    println!("cargo:rerun-if-changed={}", proto_file.display());

    // The well-known types (google.protobuf.Timestamp) resolve against the
    // include directory shipped with the vendored protoc.
    let well_known = protoc_bin_vendored::include_path().unwrap();

    tonic_build::configure()
        .out_dir("src/gen")
        .compile_protos(
            &[proto_file.to_str().unwrap()],
            &[
                std::path::Path::new(&manifest_dir)
                    .join("proto/v1")
                    .to_str()
                    .unwrap(),
                well_known.to_str().unwrap(),
            ],
        )
        .unwrap();
}
