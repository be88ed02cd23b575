//! `matplotlibrc` rendering.

use std::path::Path;

use minijinja::{context, Environment};
use serde::Serialize;
use tracing::debug;

use crate::error::{Result, StyleError};
use crate::style::DisplayConfiguration;

const RC_TEMPLATE_NAME: &str = "matplotlibrc";

const RC_TEMPLATE: &str = "\
## generated by plotstyle
## style sheet: {{ style_sheet }}
{% for param in params -%}
{{ param.key }}: {{ param.value }}
{% endfor %}";

#[derive(Serialize)]
struct RcParam {
    key: &'static str,
    value: String,
}

/// Renders display configurations as `matplotlibrc` files.
///
/// The template is compiled once and reused for every render.
///
/// # Example
///
/// ```rust
/// use plotstyle::{RcWriter, StyleOptions};
///
/// let writer = RcWriter::new().unwrap();
/// let rc = writer.render(&StyleOptions::paper().build(true)).unwrap();
/// assert!(rc.contains("axes.grid: True\n"));
/// assert!(rc.contains("figure.figsize: 9.548, 5.9\n"));
/// ```
pub struct RcWriter {
    env: Environment<'static>,
}

impl RcWriter {
    pub fn new() -> Result<Self> {
        let mut env = Environment::new();
        env.add_template(RC_TEMPLATE_NAME, RC_TEMPLATE)?;
        Ok(Self { env })
    }

    /// Renders `config` as `matplotlibrc` text, one `key: value` line per
    /// parameter.
    pub fn render(&self, config: &DisplayConfiguration) -> Result<String> {
        let params: Vec<RcParam> = config
            .rc_params()
            .into_iter()
            .map(|(key, value)| RcParam {
                key: key.as_str(),
                value,
            })
            .collect();

        let tmpl = self.env.get_template(RC_TEMPLATE_NAME)?;
        let text = tmpl.render(context! {
            style_sheet => config.style_sheet.as_str(),
            params => params,
        })?;
        Ok(text)
    }

    /// Renders `config` and writes it to `path`, replacing any existing file.
    pub fn write(&self, config: &DisplayConfiguration, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let text = self.render(config)?;
        std::fs::write(path, text).map_err(|source| StyleError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "wrote matplotlibrc");
        Ok(())
    }
}
