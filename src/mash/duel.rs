use crate::mash::catalog::{self, display_name};
use crate::mash::paths::MashPaths;
use crate::mash::select;
use crate::mash::settings;
use crate::mash::store::MashState;
use crate::mash::votelog::{self, VoteRecord};
use anyhow::Result;
use clap::Args;
use inquire::Select;
use std::path::Path;

#[derive(Args, Debug, Clone)]
pub struct DuelArgs {
    /// Stop after this many votes instead of running until Quit
    #[arg(long)]
    pub rounds: Option<u32>,
}

pub fn run(args: &DuelArgs, config_dir: &Path) -> Result<()> {
    let settings = settings::load(config_dir)?;
    let catalog = catalog::list_images(&settings.images_dir, &settings.extensions)?;
    let paths = MashPaths::new(config_dir);
    paths.ensure_dirs()?;

    let mut state = MashState::load(&paths)?;
    let mut rng = rand::thread_rng();
    let mut voted = 0u32;

    loop {
        if let Some(rounds) = args.rounds
            && voted >= rounds
        {
            break;
        }

        let (left, right) = select::pick_pair(&catalog, &mut state, &mut rng)?;
        state.save(&paths)?;

        println!("\n=== {} vs {} ===", left, right);

        let option_a = format!("A: {}", display_name(&left));
        let option_b = format!("B: {}", display_name(&right));
        let choice = Select::new(
            "Pick winner:",
            vec![option_a.clone(), option_b, "Quit".to_string()],
        )
        .prompt()?;

        if choice == "Quit" {
            break;
        }
        let (winner, loser) = if choice == option_a {
            (left, right)
        } else {
            (right, left)
        };

        let before = state.rating(&winner);
        state.record_outcome(&winner, &loser);
        state.save(&paths)?;
        votelog::append(&paths.votes_path(), &VoteRecord::new(&winner, &loser))?;
        voted += 1;

        println!(
            "{}: {:.0} -> {:.0}",
            display_name(&winner),
            before,
            state.rating(&winner)
        );
    }

    println!("✅ Votes recorded: {voted}");
    Ok(())
}
