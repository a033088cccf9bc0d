//! The configuration interview
//!
//! Presents the ordered question sequence, skipping questions whose
//! governing answer is off, then shows the assembled record and asks for
//! confirmation. Declining cancels the run before any side effect.

use crate::config::{
    ApiHandler, FontChoice, Language, PackageManager, ProjectConfig, ShadcnComponent, Template,
};
use crate::runtime;
use anyhow::Result;

/// CLI arguments for the create command
#[derive(Debug, Clone, Default)]
pub struct CreateArgs {
    /// Project name, pre-filling the first interview question
    pub name: Option<String>,
}

/// Run the full flow: interview, prerequisite check, pipeline
pub async fn run(args: CreateArgs) -> Result<()> {
    cliclack::intro("create-pro-app")?;

    let config = match interview(&args)? {
        Some(config) => config,
        None => {
            cliclack::outro("Project creation cancelled.")?;
            return Ok(());
        }
    };

    // Everything the pipeline shells out to must exist before side effects
    let tools = runtime::check_prerequisites(&config)?;
    let summary: Vec<String> = tools
        .iter()
        .map(|t| {
            format!(
                "{} ({})",
                t.name,
                t.version.as_deref().unwrap_or("unknown")
            )
        })
        .collect();
    cliclack::log::success(format!("Detected tools: {}", summary.join(", ")))?;

    crate::project::create_project(&config).await?;

    cliclack::outro("Happy coding!")?;
    Ok(())
}

/// Collect a validated configuration, or `None` when the user declines
pub fn interview(args: &CreateArgs) -> Result<Option<ProjectConfig>> {
    let project_name: String = match &args.name {
        Some(name) => {
            cliclack::log::info(format!("Project name: {}", name))?;
            name.clone()
        }
        None => cliclack::input("Enter your project name:")
            .placeholder("my-pro-app")
            .default_input("my-pro-app")
            .validate(|input: &String| {
                if input.trim().is_empty() {
                    Err("Project name must not be empty")
                } else {
                    Ok(())
                }
            })
            .interact()?,
    };

    let language: Language = cliclack::select("Choose a language:")
        .item(Language::JavaScript, "JavaScript", "")
        .item(Language::TypeScript, "TypeScript", "")
        .interact()?;

    let package_manager: PackageManager = cliclack::select("Choose a package manager:")
        .item(PackageManager::Npm, "npm", "")
        .item(PackageManager::Yarn, "yarn", "")
        .interact()?;

    let template: Template = cliclack::select("Choose a project template:")
        .item(Template::Minimal, "Minimal", "")
        .item(
            Template::Dashboard,
            "Dashboard",
            "add Tailwind for better UI",
        )
        .interact()?;

    let authentication: bool = cliclack::confirm("Do you want authentication to protect routes?")
        .initial_value(false)
        .interact()?;

    let state_manager: bool =
        cliclack::confirm("Do you want to use Redux Toolkit as a global state manager?")
            .initial_value(false)
            .interact()?;

    let persist: bool = if state_manager {
        cliclack::confirm("Do you want to add state persistence for Redux Toolkit?")
            .initial_value(false)
            .interact()?
    } else {
        false
    };

    let api_handler: ApiHandler = cliclack::select("Choose an API handler:")
        .item(ApiHandler::Axios, "Axios", "")
        .item(ApiHandler::Fetch, "Fetch", "platform built-in")
        .interact()?;

    let tailwind: bool = cliclack::confirm("Do you want to use Tailwind CSS?")
        .initial_value(false)
        .interact()?;

    let custom_fonts: bool = cliclack::confirm("Do you want to add custom fonts?")
        .initial_value(false)
        .interact()?;

    let font_choice: Option<FontChoice> = if custom_fonts {
        let mut select = cliclack::select("Choose a font:");
        for font in FontChoice::ALL {
            select = select.item(font, font.display_name(), "");
        }
        Some(select.interact()?)
    } else {
        None
    };

    let shadcn: bool = if tailwind {
        cliclack::confirm("Do you want to integrate the Shadcn UI library?")
            .initial_value(false)
            .interact()?
    } else {
        false
    };

    let shadcn_components: Vec<ShadcnComponent> = if shadcn {
        let mut multi = cliclack::multiselect("Select Shadcn UI components to include:");
        for component in ShadcnComponent::ALL {
            multi = multi.item(component, component.display_name(), "");
        }
        multi
            .initial_values(vec![ShadcnComponent::Button])
            .required(false)
            .interact()?
    } else {
        Vec::new()
    };

    let git_init: bool = cliclack::confirm("Do you want to initialize a Git repository?")
        .initial_value(true)
        .interact()?;

    let husky: bool = cliclack::confirm("Do you want to set up Husky for git hooks?")
        .initial_value(false)
        .interact()?;

    let prettier: bool = cliclack::confirm("Do you want to add Prettier for code formatting?")
        .initial_value(true)
        .interact()?;

    let eslint: bool = cliclack::confirm("Do you want to add ESLint for linting?")
        .initial_value(true)
        .interact()?;

    let config = ProjectConfig {
        project_name,
        language,
        package_manager,
        template,
        authentication,
        state_manager,
        persist,
        api_handler,
        tailwind,
        custom_fonts,
        font_choice,
        shadcn,
        shadcn_components,
        git_init,
        husky,
        prettier,
        eslint,
    };
    config.validate()?;

    let preview = serde_json::to_string_pretty(&config)?;
    cliclack::note("Configuration Preview", preview)?;

    let proceed: bool = cliclack::confirm("Do you want to proceed with this configuration?")
        .initial_value(true)
        .interact()?;

    Ok(if proceed { Some(config) } else { None })
}
