use std::error::Error;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};
use log::{error, info};
use serde_json::Value;

use eatwell::extract::{extract_recipes, parse_response};
use eatwell::normalize::normalize_all;
use eatwell::saved::toggle_batch;
use eatwell::shopping::week_shopping_list;
use eatwell::{
    build_shopping_list, build_week_plan, to_checklist_text, AiConfig, DailyPlan,
    GenerationResult, JsonFileStore, KitchenError, PlanLength, ProviderKind, Recipe, RecipeBox,
    RecipeGenerator,
};

#[derive(Parser, Debug)]
#[command(author, version, about = "Sustainable recipes from whatever is in your fridge", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Suggest recipes for ingredients, a photo, or both
    Generate {
        /// Ingredients or cravings in free text
        prompt: Option<String>,
        /// Photo of the ingredients
        #[arg(short, long)]
        image: Option<PathBuf>,
        /// Use one provider instead of the configured chain
        #[arg(short, long, value_enum)]
        provider: Option<ProviderArg>,
        /// Add the suggestions to the saved recipes
        #[arg(long)]
        save: bool,
    },
    /// Generate a meal plan and its shopping list
    Plan {
        /// Dietary preferences
        prompt: Option<String>,
        /// Days in the plan, 5 or 7
        #[arg(short, long)]
        days: Option<usize>,
        /// Use one provider instead of the configured chain
        #[arg(short, long, value_enum)]
        provider: Option<ProviderArg>,
        /// Add every planned meal to the saved recipes
        #[arg(long)]
        save: bool,
    },
    /// Print the shopping checklist for a saved provider response
    ShoppingList {
        /// JSON file with recipes or a plan, in any supported shape
        file: PathBuf,
    },
    /// Repair a provider response and print it as clean recipe JSON
    Normalize {
        file: PathBuf,
        /// Rescale every recipe to this many servings
        #[arg(short, long)]
        servings: Option<u32>,
    },
    /// List saved recipes, or toggle the recipes found in a file
    Saved {
        #[arg(long)]
        toggle: Option<PathBuf>,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ProviderArg {
    Google,
    Openai,
    Anthropic,
    Proxy,
}

impl From<ProviderArg> for ProviderKind {
    fn from(arg: ProviderArg) -> Self {
        match arg {
            ProviderArg::Google => ProviderKind::Google,
            ProviderArg::Openai => ProviderKind::OpenAI,
            ProviderArg::Anthropic => ProviderKind::Anthropic,
            ProviderArg::Proxy => ProviderKind::Proxy,
        }
    }
}

#[tokio::main]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    if let Err(e) = run(cli.command).await {
        error!("{}", e);
        match e.downcast_ref::<KitchenError>() {
            Some(k @ (KitchenError::Provider(_) | KitchenError::Fetch(_))) => {
                eprintln!("{}", k.friendly_message())
            }
            _ => eprintln!("Error: {}", e),
        }
        std::process::exit(1);
    }
}

async fn run(command: Command) -> Result<(), Box<dyn Error>> {
    let config = AiConfig::load()?;

    match command {
        Command::Generate {
            prompt,
            image,
            provider,
            save,
        } => {
            let mut builder = RecipeGenerator::builder().text(prompt.unwrap_or_default());
            if let Some(path) = image {
                builder = builder.image(path.to_string_lossy());
            }
            if let Some(provider) = provider {
                builder = builder.provider(provider.into());
            }

            let recipes = match builder.build().await? {
                GenerationResult::Recipes(recipes) => recipes,
                GenerationResult::WeekPlan(_) => Vec::new(),
            };
            if recipes.is_empty() {
                println!("No recipes this time. Try different ingredients.");
                return Ok(());
            }
            for recipe in &recipes {
                print_recipe(recipe);
            }
            if save {
                let mut recipe_box = open_recipe_box(&config).await?;
                let added = recipe_box.save_all(&recipes).await?;
                println!("Saved {} new recipes.", added);
            }
        }
        Command::Plan {
            prompt,
            days,
            provider,
            save,
        } => {
            let length = match days {
                Some(days) => PlanLength::from_days(days)
                    .ok_or_else(|| format!("A plan covers 5 or 7 days, not {}", days))?,
                None => config.planner.plan_length(),
            };
            let mut builder = RecipeGenerator::builder()
                .text(prompt.unwrap_or_else(|| "Sustainable, easy-to-prep meals".to_string()))
                .week_plan(length);
            if let Some(provider) = provider {
                builder = builder.provider(provider.into());
            }

            let plan = match builder.build().await? {
                GenerationResult::WeekPlan(plan) => plan,
                GenerationResult::Recipes(_) => Vec::new(),
            };
            if plan.is_empty() {
                println!("The chefs came back without a plan. Please try again.");
                return Ok(());
            }
            print_plan(&plan);
            println!("\nShopping list:\n{}", to_checklist_text(&week_shopping_list(&plan)));
            if save {
                let mut recipe_box = open_recipe_box(&config).await?;
                let added = recipe_box.save_plan(&plan).await?;
                println!("Saved {} new recipes.", added);
            }
        }
        Command::ShoppingList { file } => {
            let recipes = recipes_in_file(&file).await?;
            let items = build_shopping_list(&recipes);
            if items.is_empty() {
                println!("Nothing to buy.");
            } else {
                println!("{}", to_checklist_text(&items));
            }
        }
        Command::Normalize { file, servings } => {
            let mut recipes = recipes_in_file(&file).await?;
            if let Some(servings) = servings {
                recipes = recipes.iter().map(|r| r.scaled_to(servings)).collect();
            }
            println!("{}", serde_json::to_string_pretty(&recipes)?);
        }
        Command::Saved { toggle } => {
            let mut recipe_box = open_recipe_box(&config).await?;
            if let Some(file) = toggle {
                let recipes = recipes_in_file(&file).await?;
                for recipe in toggle_batch(&recipes) {
                    let saved = recipe_box.toggle(&recipe).await?;
                    println!(
                        "{} {}",
                        if saved { "Saved" } else { "Removed" },
                        recipe.title
                    );
                }
            }
            let saved = recipe_box.saved();
            if saved.is_empty() {
                println!("No saved recipes yet.");
            }
            for recipe in saved {
                println!("* {} ({}, {} kcal)", recipe.title, recipe.cooking_time, recipe.calories);
            }
        }
    }

    Ok(())
}

async fn open_recipe_box(config: &AiConfig) -> Result<RecipeBox<JsonFileStore>, Box<dyn Error>> {
    let store = JsonFileStore::new(&config.storage.data_dir);
    info!("Saved recipes live in {}", store.dir().display());
    Ok(RecipeBox::open(store).await?)
}

/// Every recipe in a response file, whether it holds recipes or plan days.
async fn recipes_in_file(path: &Path) -> Result<Vec<Recipe>, Box<dyn Error>> {
    let text = tokio::fs::read_to_string(path).await?;
    let items = extract_recipes(&parse_response(&text));

    if items.iter().any(is_plan_day) {
        let length = PlanLength::from_days(items.len()).unwrap_or_default();
        let plan = build_week_plan(&items, length);
        return Ok(plan
            .iter()
            .flat_map(|day| day.recipes())
            .cloned()
            .collect());
    }
    Ok(normalize_all(&items))
}

fn is_plan_day(item: &Value) -> bool {
    ["breakfast", "lunch", "snack", "dinner"]
        .iter()
        .any(|slot| item.get(*slot).is_some())
}

fn print_recipe(recipe: &Recipe) {
    println!("\n{}", recipe.title);
    if !recipe.description.is_empty() {
        println!("{}", recipe.description);
    }
    println!(
        "{} | {} | {} kcal | serves {} | sustainability {}/10",
        recipe.cooking_time,
        recipe.difficulty,
        recipe.calories,
        recipe.servings,
        recipe.sustainability_score
    );
    for ingredient in &recipe.ingredients {
        println!("  - {}", ingredient);
    }
    for (step, instruction) in recipe.instructions.iter().enumerate() {
        println!("  {}. {}", step + 1, instruction);
    }
    if !recipe.eco_tip.is_empty() {
        println!("  Eco tip: {}", recipe.eco_tip);
    }
}

fn print_plan(plan: &[DailyPlan]) {
    for day in plan {
        println!("\n{}", day.day);
        println!("  Breakfast: {}", day.breakfast.title);
        println!("  Lunch:     {}", day.lunch.title);
        println!("  Snack:     {}", day.snack.title);
        println!("  Dinner:    {}", day.dinner.title);
    }
}
