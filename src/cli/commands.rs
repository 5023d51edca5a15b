//! Command table and handlers for the banking shell.

use crate::cli::context::{CliMode, CommandError, CommandResult, ShellContext};
use crate::cli::output;
use crate::ledger::{AccountSnapshot, AccountTier};
use crate::services::TellerService;

type Handler = fn(&mut ShellContext, &[&str]) -> CommandResult;

struct CommandSpec {
    name: &'static str,
    usage: &'static str,
    summary: &'static str,
    handler: Handler,
}

const COMMANDS: &[CommandSpec] = &[
    CommandSpec {
        name: "open",
        usage: "open <name> <passcode> <standard|vip> [starting_balance]",
        summary: "Create a new account",
        handler: open,
    },
    CommandSpec {
        name: "show",
        usage: "show <name>",
        summary: "Display one account",
        handler: show,
    },
    CommandSpec {
        name: "deposit",
        usage: "deposit <name> <amount>",
        summary: "Deposit funds",
        handler: deposit,
    },
    CommandSpec {
        name: "withdraw",
        usage: "withdraw <name> <passcode> <amount>",
        summary: "Withdraw funds (passcode-gated)",
        handler: withdraw,
    },
    CommandSpec {
        name: "close",
        usage: "close <name> <passcode>",
        summary: "Remove an account (passcode-gated)",
        handler: close,
    },
    CommandSpec {
        name: "list",
        usage: "list [standard|vip]",
        summary: "Display all accounts, optionally one tier",
        handler: list,
    },
    CommandSpec {
        name: "interest",
        usage: "interest <name> <months>",
        summary: "Project interest over a number of months",
        handler: interest,
    },
    CommandSpec {
        name: "dump",
        usage: "dump",
        summary: "Print all account snapshots as JSON",
        handler: dump,
    },
    CommandSpec {
        name: "config",
        usage: "config",
        summary: "Show the current configuration",
        handler: show_config,
    },
    CommandSpec {
        name: "set",
        usage: "set <currency|locale|theme> <value>",
        summary: "Update a configuration value",
        handler: set_config,
    },
    CommandSpec {
        name: "help",
        usage: "help",
        summary: "List available commands",
        handler: help,
    },
    CommandSpec {
        name: "exit",
        usage: "exit",
        summary: "Leave the shell",
        handler: exit,
    },
];

pub(crate) fn handler(name: &str) -> Option<Handler> {
    COMMANDS
        .iter()
        .find(|spec| spec.name == name)
        .map(|spec| spec.handler)
}

pub(crate) fn names() -> Vec<&'static str> {
    COMMANDS.iter().map(|spec| spec.name).collect()
}

fn usage(name: &str) -> CommandError {
    let spec = COMMANDS
        .iter()
        .find(|spec| spec.name == name)
        .expect("usage requested for registered command");
    CommandError::InvalidArguments(format!("usage: {}", spec.usage))
}

fn parse_amount(raw: &str, label: &str) -> Result<f64, CommandError> {
    raw.parse::<f64>()
        .map_err(|_| CommandError::InvalidArguments(format!("{} must be numeric", label)))
}

fn parse_tier(raw: &str) -> Result<AccountTier, CommandError> {
    raw.parse::<AccountTier>().map_err(|_| {
        CommandError::InvalidArguments(format!(
            "unknown tier `{}`; expected `standard` or `vip`",
            raw
        ))
    })
}

fn print_account(ctx: &ShellContext, snapshot: &AccountSnapshot) {
    output::section("Account Details");
    output::info(format!("Name: {}", snapshot.name));
    output::info(format!("Account type: {}", snapshot.tier));
    output::info(format!("Balance: {}", ctx.format_balance(snapshot.balance)));
}

fn open(ctx: &mut ShellContext, args: &[&str]) -> CommandResult {
    if args.len() < 3 || args.len() > 4 {
        return Err(usage("open"));
    }
    let tier = parse_tier(args[2])?;
    let starting_balance = match args.get(3) {
        Some(raw) => parse_amount(raw, "starting_balance")?,
        None => 0.0,
    };
    let snapshot =
        TellerService::open_account(&mut ctx.ledger, args[0], args[1], tier, starting_balance)?;
    output::success(format!("Account `{}` created.", snapshot.name));
    print_account(ctx, &snapshot);
    Ok(())
}

fn show(ctx: &mut ShellContext, args: &[&str]) -> CommandResult {
    let [name] = args else {
        return Err(usage("show"));
    };
    match ctx.ledger.find(name) {
        Some(account) => {
            let snapshot = account.snapshot();
            print_account(ctx, &snapshot);
            Ok(())
        }
        None => {
            output::warning(format!("Name: {} does not exist", name));
            Ok(())
        }
    }
}

fn deposit(ctx: &mut ShellContext, args: &[&str]) -> CommandResult {
    let [name, raw_amount] = args else {
        return Err(usage("deposit"));
    };
    let amount = parse_amount(raw_amount, "amount")?;
    let balance = TellerService::deposit(&mut ctx.ledger, name, amount)?;
    output::success(format!(
        "Deposited {}. Balance for `{}` is now {}.",
        ctx.format_balance(amount),
        name,
        ctx.format_balance(balance)
    ));
    Ok(())
}

fn withdraw(ctx: &mut ShellContext, args: &[&str]) -> CommandResult {
    let [name, passcode, raw_amount] = args else {
        return Err(usage("withdraw"));
    };
    let amount = parse_amount(raw_amount, "amount")?;
    let balance = TellerService::withdraw(&mut ctx.ledger, name, passcode, amount)?;
    output::success(format!(
        "Withdrew {}. Balance for `{}` is now {}.",
        ctx.format_balance(amount),
        name,
        ctx.format_balance(balance)
    ));
    Ok(())
}

fn close(ctx: &mut ShellContext, args: &[&str]) -> CommandResult {
    let [name, passcode] = args else {
        return Err(usage("close"));
    };
    if ctx.mode() == CliMode::Interactive {
        let confirmed = dialoguer::Confirm::with_theme(&ctx.theme)
            .with_prompt(format!("Remove account `{}`?", name))
            .default(false)
            .interact()?;
        if !confirmed {
            output::info("Operation cancelled.");
            return Ok(());
        }
    }
    TellerService::close_account(&mut ctx.ledger, name, passcode)?;
    output::success(format!("Account `{}` has been removed.", name));
    Ok(())
}

fn list(ctx: &mut ShellContext, args: &[&str]) -> CommandResult {
    let tiers: Vec<AccountTier> = match args {
        [] => vec![AccountTier::Standard, AccountTier::Vip],
        [raw] => vec![parse_tier(raw)?],
        _ => return Err(usage("list")),
    };

    if ctx.ledger.is_empty() {
        output::warning("No accounts yet.");
        return Ok(());
    }

    for tier in tiers {
        let mut accounts = ctx.ledger.list_by_tier(tier);
        if accounts.is_empty() {
            continue;
        }
        accounts.sort_by(|a, b| a.name.cmp(&b.name));
        let snapshots: Vec<AccountSnapshot> =
            accounts.iter().map(|account| account.snapshot()).collect();
        output::section(format!("{} Account Details", tier));
        for snapshot in &snapshots {
            output::info(format!(
                "{} — {}",
                snapshot.name,
                ctx.format_balance(snapshot.balance)
            ));
        }
    }
    Ok(())
}

fn interest(ctx: &mut ShellContext, args: &[&str]) -> CommandResult {
    let [name, raw_months] = args else {
        return Err(usage("interest"));
    };
    let months = raw_months
        .parse::<i64>()
        .map_err(|_| CommandError::InvalidArguments("months must be a whole number".into()))?;
    let projected = TellerService::project_interest(&ctx.ledger, name, months)?;
    output::success(format!(
        "The expected interest is: {}",
        ctx.format_interest(projected)
    ));
    Ok(())
}

fn dump(ctx: &mut ShellContext, args: &[&str]) -> CommandResult {
    if !args.is_empty() {
        return Err(usage("dump"));
    }
    let mut snapshots = ctx.ledger.snapshots();
    snapshots.sort_by(|a, b| a.name.cmp(&b.name));
    println!("{}", serde_json::to_string_pretty(&snapshots)?);
    Ok(())
}

fn show_config(ctx: &mut ShellContext, args: &[&str]) -> CommandResult {
    if !args.is_empty() {
        return Err(usage("config"));
    }
    output::section("Configuration");
    output::info(format!("Locale: {}", ctx.config.locale));
    output::info(format!("Currency: {}", ctx.config.currency));
    output::info(format!(
        "Theme: {}",
        ctx.config.theme.as_deref().unwrap_or("default")
    ));
    Ok(())
}

fn set_config(ctx: &mut ShellContext, args: &[&str]) -> CommandResult {
    let [key, value] = args else {
        return Err(usage("set"));
    };
    match key.to_lowercase().as_str() {
        "currency" => ctx.config.currency = value.to_string(),
        "locale" => ctx.config.locale = value.to_string(),
        "theme" => {
            if value.eq_ignore_ascii_case("none") || value.is_empty() {
                ctx.config.theme = None;
            } else {
                ctx.config.theme = Some(value.to_string());
            }
        }
        other => {
            return Err(CommandError::InvalidArguments(format!(
                "unknown config key `{}`",
                other
            )))
        }
    }
    ctx.persist_config()?;
    output::success("Configuration updated.");
    Ok(())
}

fn help(_ctx: &mut ShellContext, _args: &[&str]) -> CommandResult {
    output::section("Commands");
    for spec in COMMANDS {
        output::info(format!("{:<55} {}", spec.usage, spec.summary));
    }
    Ok(())
}

fn exit(_ctx: &mut ShellContext, _args: &[&str]) -> CommandResult {
    output::info("Thank you for banking with us!");
    Err(CommandError::ExitRequested)
}
