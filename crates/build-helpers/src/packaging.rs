//! Release packaging utilities

use anyhow::Result;
use std::fs;
use std::path::Path;

/// Create a release package for a specific target
pub fn create_release_package(target: &str, output_dir: &str) -> Result<()> {
    let output_path = Path::new(output_dir);
    fs::create_dir_all(output_path)?;
    
    println!("Creating release package for target: {}", target);
    println!("Output directory: {}", output_dir);
    
    // TODO: Implement actual packaging
    // This would:
    // 1. Copy binaries
    // 2. Copy documentation  
    // 3. Copy specs and examples
    // 4. Create archives (tar.gz, zip)
    
    let package_contents = vec![
        "README.md",
        "LICENSE",
        "CHANGELOG.md",
        "docs/",
        "specs/",
        "target/release/same-gen",
        "target/release/same-info",
    ];
    
    println!("Package would include:");
    for item in package_contents {
        println!("  - {}", item);
    }
    
    Ok(())
}

/// Package configuration
pub struct PackageConfig {
    pub name: String,
    pub version: String,
    pub target: String,
    pub include_debug_info: bool,
    pub compress: bool,
}

impl PackageConfig {
    pub fn new(name: &str, version: &str, target: &str) -> Self {
        Self {
            name: name.to_string(),
            version: version.to_string(),
            target: target.to_string(),
            include_debug_info: false,
            compress: true,
        }
    }
    
    pub fn package_filename(&self) -> String {
        if self.compress {
            format!("{}-{}-{}.tar.gz", self.name, self.version, self.target)
        } else {
            format!("{}-{}-{}", self.name, self.version, self.target)
        }
    }
}