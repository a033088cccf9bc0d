//! Project structure builder
//!
//! Walks the configuration once and materializes the source tree: clears the
//! managed `src/` subtree, recreates the directory skeleton, and writes every
//! file whose gating flag is on. Directories always exist before files land
//! in them. Re-running against the same target yields an identical tree.

use crate::config::ProjectConfig;
use crate::templates::{api, app, routes, store, styles, ui, views};
use anyhow::{Context, Result};
use std::path::Path;
use tokio::fs;

async fn write_file(path: &Path, content: String) -> Result<()> {
    fs::write(path, content)
        .await
        .with_context(|| format!("Failed to write {}", path.display()))
}

/// Create the generated-source tree under `project_dir`
///
/// Destructively resets `src/` (and only `src/`) first, so stale files from
/// a previous run with a different configuration never accumulate.
pub async fn create_structure(project_dir: &Path, config: &ProjectConfig) -> Result<()> {
    let ext = config.language.ext();
    let src_dir = project_dir.join("src");
    let components_dir = src_dir.join("components");

    if src_dir.exists() {
        fs::remove_dir_all(&src_dir)
            .await
            .with_context(|| format!("Failed to clear {}", src_dir.display()))?;
    }
    fs::create_dir_all(&components_dir)
        .await
        .context("Failed to create source directories")?;

    write_file(
        &src_dir.join(format!("App.{}", ext)),
        app::app_component(config),
    )
    .await?;
    write_file(&src_dir.join(format!("main.{}", ext)), app::bootstrap(config)).await?;
    write_file(&project_dir.join("index.html"), app::index_html(config)).await?;
    write_file(
        &components_dir.join(format!("ErrorFallback.{}", ext)),
        app::error_fallback(config),
    )
    .await?;

    let routes_dir = src_dir.join("routes");
    fs::create_dir_all(&routes_dir)
        .await
        .context("Failed to create routes directory")?;
    write_file(
        &routes_dir.join(format!("ProjectRoutes.{}", ext)),
        routes::project_routes(config),
    )
    .await?;

    if config.authentication {
        write_file(
            &routes_dir.join(format!("PrivateRoutes.{}", ext)),
            routes::private_routes(config),
        )
        .await?;
        write_file(
            &routes_dir.join(format!("PublicRoutes.{}", ext)),
            routes::public_routes(config),
        )
        .await?;

        let utils_dir = src_dir.join("utils");
        fs::create_dir_all(&utils_dir)
            .await
            .context("Failed to create utils directory")?;
        write_file(
            &utils_dir.join(format!("auth.{}", config.language.config_ext())),
            routes::auth_predicate(config),
        )
        .await?;

        let pages_dir = src_dir.join("pages");
        fs::create_dir_all(&pages_dir)
            .await
            .context("Failed to create pages directory")?;
        write_file(
            &pages_dir.join(format!("Login.{}", ext)),
            views::login_page(config),
        )
        .await?;
    }

    if config.wants_dashboard() {
        write_file(
            &components_dir.join(format!("Dashboard.{}", ext)),
            views::dashboard_view(config),
        )
        .await?;
    }

    if config.state_manager {
        let store_dir = src_dir.join("store");
        fs::create_dir_all(&store_dir)
            .await
            .context("Failed to create store directory")?;
        write_file(
            &store_dir.join(format!("store.{}", ext)),
            store::store(config),
        )
        .await?;
        if config.authentication {
            write_file(
                &store_dir.join(format!("userSlice.{}", ext)),
                store::user_slice(config),
            )
            .await?;
        } else {
            write_file(
                &store_dir.join(format!("counterSlice.{}", ext)),
                store::counter_slice(config),
            )
            .await?;
        }
    }

    let api_dir = src_dir.join("api");
    fs::create_dir_all(&api_dir)
        .await
        .context("Failed to create api directory")?;
    write_file(
        &api_dir.join(format!("api.{}", ext)),
        api::api_client(config),
    )
    .await?;

    if config.tailwind {
        write_file(&src_dir.join("index.css"), styles::tailwind_css(config)).await?;
    }

    if config.shadcn {
        let lib_dir = src_dir.join("lib");
        fs::create_dir_all(&lib_dir)
            .await
            .context("Failed to create lib directory")?;
        write_file(&lib_dir.join(format!("utils.{}", ext)), ui::cn_utils(config)).await?;

        let ui_dir = components_dir.join("ui");
        fs::create_dir_all(&ui_dir)
            .await
            .context("Failed to create ui components directory")?;
        for component in &config.shadcn_components {
            write_file(
                &ui_dir.join(format!("{}.{}", component.file_stem(), ext)),
                ui::component(config, *component),
            )
            .await?;
        }
    }

    Ok(())
}
