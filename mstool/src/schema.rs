//! SQL schema embedding.

use std::path::Path;

use schema_embed::ArrayStyle;

use crate::ctx::AppContext;

impl AppContext {
    /// Embeds the schema at `input` into `output`.
    ///
    /// `style` overrides the configured array style.
    ///
    /// # Returns
    ///
    /// The number of statements written.
    ///
    /// # Errors
    ///
    /// Returns an error naming the path that could not be read or written.
    pub fn embed_schema(
        &self,
        input: &Path,
        output: &Path,
        style: Option<ArrayStyle>,
    ) -> anyhow::Result<usize> {
        let style = style.unwrap_or(self.config.schema.style);
        let count =
            schema_embed::embed_file(&self.resolve(input), &self.resolve(output), style)?;

        info!(
            "embedded {count} statements from {} into {}",
            input.display(),
            output.display()
        );
        Ok(count)
    }
}
