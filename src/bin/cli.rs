use clap::{Parser, Subcommand};
use rollcall::modules::students::generator::{RosterShape, generate};
use rollcall_models::ClassroomId;
use std::io::Write;

#[derive(Parser)]
#[command(name = "rollcall-cli")]
#[command(about = "Rollcall CLI - inspect generated classroom rosters", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the roster generated for a classroom as JSON
    Roster {
        /// Classroom UUID
        classroom_id: ClassroomId,

        /// Pretty-print the JSON output
        #[arg(short = 'p', long)]
        pretty: bool,
    },
    /// Print the seed, class size and grade derived from a classroom id
    Shape {
        /// Classroom UUID
        classroom_id: ClassroomId,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let mut stdout = std::io::stdout().lock();

    match cli.command {
        Commands::Roster {
            classroom_id,
            pretty,
        } => {
            let roster = generate(classroom_id);
            if pretty {
                serde_json::to_writer_pretty(&mut stdout, &roster)?;
            } else {
                serde_json::to_writer(&mut stdout, &roster)?;
            }
            writeln!(stdout)?;
        }
        Commands::Shape { classroom_id } => {
            let shape = RosterShape::for_classroom(classroom_id);
            writeln!(stdout, "classroom:  {classroom_id}")?;
            writeln!(stdout, "seed:       {:#018x}", shape.seed)?;
            writeln!(stdout, "class size: {}", shape.class_size)?;
            writeln!(stdout, "grade:      {} ({})", shape.grade, shape.grade.as_i8())?;
        }
    }

    Ok(())
}
