use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::error;

use useshortcut::config::resolve_token;
use useshortcut::model::{
    CreateCategoryParams, CreateEpicInput, CreateGroupInput, CreateIterationInput,
    CreateLabelParams, CreateStoryParams, SearchInputs,
};
use useshortcut::ApiClient;

#[derive(Parser)]
#[command(name = "shortcut", about = "Shortcut API from the command line", version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// API token (defaults to SHORTCUT_API_TOKEN or ~/.useshortcut/config.toml)
    #[arg(long, global = true)]
    token: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Search or create stories
    Stories {
        #[command(subcommand)]
        command: StoryCommands,
    },
    /// List or create epics
    Epics {
        #[command(subcommand)]
        command: EpicCommands,
    },
    /// List or create iterations
    Iterations {
        #[command(subcommand)]
        command: IterationCommands,
    },
    /// List or create labels
    Labels {
        #[command(subcommand)]
        command: LabelCommands,
    },
    /// List or create groups (teams)
    Groups {
        #[command(subcommand)]
        command: GroupCommands,
    },
    /// List or create categories
    Categories {
        #[command(subcommand)]
        command: CategoryCommands,
    },
    /// List workspace members
    Members,
    /// List projects
    Projects,
    /// List workflows and their states
    Workflows,
    /// Show the member the token belongs to
    Me,
}

#[derive(Subcommand)]
enum StoryCommands {
    /// Search stories with the Shortcut query syntax
    Search {
        /// e.g. "owner:jane state:\"In Progress\""
        query: String,
        /// Page size hint (the server caps this)
        #[arg(long)]
        page_size: Option<i64>,
    },
    /// Create a story
    Create {
        name: String,
        #[arg(long)]
        description: Option<String>,
        /// feature, bug, or chore
        #[arg(long = "type")]
        story_type: Option<String>,
        #[arg(long)]
        epic_id: Option<i64>,
        #[arg(long)]
        iteration_id: Option<i64>,
        #[arg(long)]
        workflow_state_id: Option<i64>,
    },
}

#[derive(Subcommand)]
enum EpicCommands {
    List,
    Create {
        name: String,
        #[arg(long)]
        description: Option<String>,
        /// "to do", "in progress", or "done"
        #[arg(long)]
        state: Option<String>,
    },
}

#[derive(Subcommand)]
enum IterationCommands {
    List,
    Create {
        name: String,
        /// YYYY-MM-DD
        start_date: String,
        /// YYYY-MM-DD
        end_date: String,
        #[arg(long)]
        description: Option<String>,
    },
}

#[derive(Subcommand)]
enum LabelCommands {
    List,
    Create {
        name: String,
        /// Hex color, e.g. "#ff0000"
        #[arg(long)]
        color: Option<String>,
        #[arg(long)]
        description: Option<String>,
    },
}

#[derive(Subcommand)]
enum GroupCommands {
    List,
    Create {
        name: String,
        mention_name: String,
        #[arg(long)]
        description: Option<String>,
    },
}

#[derive(Subcommand)]
enum CategoryCommands {
    List,
    Create {
        name: String,
        #[arg(long)]
        color: Option<String>,
    },
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        error!("{e:#}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let token = resolve_token(cli.token)?;
    let client = match useshortcut::config::load_config()?.base_url {
        Some(base) => ApiClient::with_base_url(&token, &base)?,
        None => ApiClient::new(&token)?,
    };

    match cli.command {
        Commands::Stories { command } => match command {
            StoryCommands::Search { query, page_size } => {
                let mut params = SearchInputs::new(query);
                params.page_size = page_size;
                for story in client.search_stories_all(&params).await? {
                    println!(
                        "[{}] {} ({})",
                        story.id.map_or_else(|| "-".to_string(), |id| id.to_string()),
                        story.name,
                        story.story_type,
                    );
                }
            }
            StoryCommands::Create {
                name,
                description,
                story_type,
                epic_id,
                iteration_id,
                workflow_state_id,
            } => {
                let story = client
                    .create_story(&CreateStoryParams {
                        name,
                        description,
                        story_type,
                        epic_id,
                        iteration_id,
                        workflow_state_id,
                        ..Default::default()
                    })
                    .await?;
                println!(
                    "Created story {}: {}",
                    story.id.map_or_else(|| "-".to_string(), |id| id.to_string()),
                    story.name
                );
            }
        },
        Commands::Epics { command } => match command {
            EpicCommands::List => {
                for epic in client.list_epics().await? {
                    println!("[{}] {} ({})", epic.id, epic.name, epic.state);
                }
            }
            EpicCommands::Create {
                name,
                description,
                state,
            } => {
                let epic = client
                    .create_epic(&CreateEpicInput {
                        name,
                        description,
                        state,
                        ..Default::default()
                    })
                    .await?;
                println!("Created epic {}: {}", epic.id, epic.name);
            }
        },
        Commands::Iterations { command } => match command {
            IterationCommands::List => {
                for iteration in client.list_iterations().await? {
                    println!("[{}] {} ({})", iteration.id, iteration.name, iteration.status);
                }
            }
            IterationCommands::Create {
                name,
                start_date,
                end_date,
                description,
            } => {
                let iteration = client
                    .create_iteration(&CreateIterationInput {
                        name,
                        start_date,
                        end_date,
                        description,
                        ..Default::default()
                    })
                    .await?;
                println!("Created iteration {}: {}", iteration.id, iteration.name);
            }
        },
        Commands::Labels { command } => match command {
            LabelCommands::List => {
                for label in client.list_labels().await? {
                    println!("[{}] {}", label.id, label.name);
                }
            }
            LabelCommands::Create {
                name,
                color,
                description,
            } => {
                let label = client
                    .create_label(&CreateLabelParams {
                        name,
                        color,
                        description,
                        ..Default::default()
                    })
                    .await?;
                println!("Created label {}: {}", label.id, label.name);
            }
        },
        Commands::Groups { command } => match command {
            GroupCommands::List => {
                for group in client.list_groups().await? {
                    println!("[{}] {} (@{})", group.id, group.name, group.mention_name);
                }
            }
            GroupCommands::Create {
                name,
                mention_name,
                description,
            } => {
                let group = client
                    .create_group(&CreateGroupInput {
                        name,
                        mention_name,
                        description,
                        ..Default::default()
                    })
                    .await?;
                println!("Created group {}: {}", group.id, group.name);
            }
        },
        Commands::Categories { command } => match command {
            CategoryCommands::List => {
                for category in client.list_categories().await? {
                    println!("[{}] {}", category.id, category.name);
                }
            }
            CategoryCommands::Create { name, color } => {
                let category = client
                    .create_category(&CreateCategoryParams {
                        name,
                        color,
                        ..Default::default()
                    })
                    .await?;
                println!("Created category {}: {}", category.id, category.name);
            }
        },
        Commands::Members => {
            for member in client.list_members().await? {
                println!("[{}] @{} ({})", member.id, member.profile.mention_name, member.role);
            }
        }
        Commands::Projects => {
            for project in client.list_projects().await? {
                println!("[{}] {}", project.id, project.name);
            }
        }
        Commands::Workflows => {
            for workflow in client.list_workflows().await? {
                println!("[{}] {}", workflow.id, workflow.name);
                for state in workflow.states {
                    println!("    [{}] {} ({})", state.id, state.name, state.state_type);
                }
            }
        }
        Commands::Me => {
            let member = client.get_current_member().await?;
            println!("[{}] @{} ({})", member.id, member.profile.mention_name, member.role);
        }
    }

    Ok(())
}
