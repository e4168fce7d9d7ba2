use std::env;

use embed_manifest::{
	embed_manifest,
	manifest::{ActiveCodePage, DpiAwareness, Setting, SupportedOS::*},
	new_manifest,
};
use winres::WindowsResource;

fn main() {
	println!("cargo:rerun-if-changed=build.rs");
	println!("cargo:rerun-if-changed=Cargo.toml");

	let target = env::var("TARGET").unwrap_or_default();
	if target.contains("windows") {
		let manifest = new_manifest("Traynote")
			.supported_os(Windows7..=Windows10)
			.active_code_page(ActiveCodePage::Utf8)
			.dpi_awareness(DpiAwareness::PerMonitorV2)
			.long_path_aware(Setting::Enabled);
		if let Err(e) = embed_manifest(manifest) {
			println!("cargo:warning=Failed to embed manifest: {}", e);
			println!("cargo:warning=Balloons will still show but may use legacy shell styling");
		}
		embed_version_info();
	}
}

fn embed_version_info() {
	let version = env::var("CARGO_PKG_VERSION").unwrap_or_else(|_| "0.0.0".to_string());
	let description = env::var("CARGO_PKG_DESCRIPTION").unwrap_or_default();
	let mut res = WindowsResource::new();
	res.set("ProductName", "Traynote")
		.set("FileDescription", &description)
		.set("OriginalFilename", "traynote.exe")
		.set("ProductVersion", &version)
		.set("FileVersion", &version);
	if let Err(e) = res.compile() {
		println!("cargo:warning=Failed to embed version info: {}", e);
	}
}
