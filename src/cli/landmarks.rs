//! Landmarks command handler

use crate::config::Config;
use crate::error::Result;
use crate::landmark::Gazetteer;
use clap::Args;

/// Landmarks command arguments
#[derive(Args)]
pub struct LandmarksArgs {
    /// Print JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

/// Run the landmarks command
pub fn run(args: LandmarksArgs) -> Result<()> {
    let config = Config::load()?;
    let gazetteer = config.gazetteer()?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(gazetteer.landmarks())?);
    } else {
        print!("{}", format_table(&gazetteer));
    }

    Ok(())
}

fn format_table(gazetteer: &Gazetteer) -> String {
    let width = gazetteer
        .landmarks()
        .iter()
        .map(|l| l.name.len())
        .max()
        .unwrap_or(0);

    let mut output = String::new();
    for landmark in gazetteer.landmarks() {
        output.push_str(&format!(
            "{:<width$}  {}  {}\n",
            landmark.name,
            landmark.coords,
            landmark.description,
            width = width
        ));
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::landmark::campus::campus_gazetteer;

    #[test]
    fn test_format_table() {
        let table = format_table(&campus_gazetteer());
        let lines: Vec<_> = table.lines().collect();

        assert_eq!(lines.len(), 7);
        assert!(lines[0].starts_with("auditorium  (21.128455, 81.765587)"));
        assert!(lines[1].starts_with("canteen     (21.128007, 81.765831)"));
        assert!(lines[6].ends_with("Bose building for physics department."));
    }
}
