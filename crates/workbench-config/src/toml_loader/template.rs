//! Default TOML config template.

use crate::schema::CONFIG_SCHEMA_VERSION;

pub(crate) fn default_config_toml() -> String {
    let header = format!("# Workbench Configuration\n# Schema version {CONFIG_SCHEMA_VERSION}\n");
    header
        + r##"# Only override what you want to change -- missing fields use defaults.

[ids]
# Editor and compiler ids are allocated from 1 up to (not including) this.
# ceiling = 100000       # 2-1000000

[language]
# Language for new editors when none was opened yet.
# default = "c++"
# Language implied by the hosting site; wins over `default`.
# subdomain = "rust"

[logging]
# tracing EnvFilter directive, overridden by --log-level and RUST_LOG.
# level = "workbench=info"
"##
}
