//! Command implementations.

mod categories;
mod defaults;
mod list;
mod show;

pub use categories::CategoriesCommand;
pub use defaults::DefaultsCommand;
pub use list::ListCommand;
pub use show::ShowCommand;

use stencil_templates::{CategoryManager, TemplatesLoader};

use crate::error::CliError;

/// Managers selected by an optional `--category` flag, in declared order.
pub(crate) fn select_managers<'a>(
    loader: &'a TemplatesLoader,
    category: Option<&str>,
) -> Result<Vec<&'a CategoryManager>, CliError> {
    match category {
        Some(name) => {
            let manager = loader
                .all_managers()
                .iter()
                .find(|m| m.name().eq_ignore_ascii_case(name))
                .ok_or_else(|| {
                    CliError::not_found_with_suggestions(
                        "Category",
                        name,
                        TemplatesLoader::category_names().iter().map(|n| n.to_string()).collect(),
                    )
                })?;
            Ok(vec![manager])
        }
        None => Ok(loader.all_managers().iter().collect()),
    }
}
