use anyhow::Context;
use clap::Parser;
use design_playgrounds::core::abstract_factory::HotDrinkMachine;
use design_playgrounds::utils::logger;

#[derive(Parser)]
#[command(name = "hot-drink-machine")]
#[command(about = "Interactive abstract factory example")]
struct Args {
    /// Amount in ml to pour
    #[arg(short, long, default_value = "250")]
    amount: u32,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    logger::init_cli_logger(args.verbose);

    let machine = HotDrinkMachine::with_amount(args.amount);
    println!("{} drinks on offer", machine.list_available().len());

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    let drink = machine
        .make_drink_interactively(&mut stdin.lock(), &mut out)
        .with_context(|| format!("Pick a number from 0 to {}", machine.list_available().len() - 1))?;
    drink.consume(&mut out)?;

    Ok(())
}
