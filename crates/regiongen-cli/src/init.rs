//! `regiongen init`: write a starter configuration

use anyhow::{Context, Result, bail};
use std::fs;
use std::path::Path;

const STARTER_CONFIG: &str = r#"# regiongen configuration
#
# Target paths are relative to this file.

[markers]
begin = "BEGIN_GAME_BUILDER_CODE_GEN"
end = "END_GAME_BUILDER_CODE_GEN"

[annotation]
suffix = "    // GENERATED"
min_line_len = 8
comment_delimiters = ["*", "//"]

[schema]
# Fail instead of warning when an actor field has no networking annotation
strict_networking = false

[[targets]]
path = "Assets/Scripts/Voos/VoosActor.cs"
registry = "actor"

[[targets]]
path = "Assets/Scripts/Voos/ActorNetworking.cs"
registry = "actor"

[[targets]]
path = "Assets/Scripts/Behaviors/JavaScript/ModuleBehaviorsActor.js.txt"
registry = "actor"

[[targets]]
path = "Assets/Scripts/Core/GameBuilderStage.cs"
registry = "stage"

[[targets]]
path = "Assets/Scripts/Behaviors/JavaScript/apiv2/remote/remote.js.txt"
registry = "remote-api"

[[targets]]
path = "Assets/Scripts/Voos/V8InUnity/Native.cs"
registry = "native-accessors"
"#;

pub fn run(output: &Path, force: bool) -> Result<()> {
    if output.exists() && !force {
        bail!(
            "{} already exists (use --force to overwrite)",
            output.display()
        );
    }

    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    fs::write(output, STARTER_CONFIG)
        .with_context(|| format!("Failed to write {}", output.display()))?;

    println!("✓ Created {}", output.display());
    println!("\nNext steps:");
    println!("  Edit the [[targets]] list, then run: regiongen run --dry-run");
    Ok(())
}
