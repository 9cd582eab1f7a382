// src/bin/baccarat_dev_cli.rs
//
// Использование: baccarat_dev_cli [rounds] [seed] [config.json]

use baccarat_engine::api::{execute_command, Command, CommandResponse, TableViewDto};
use baccarat_engine::domain::bets::BetCategory;
use baccarat_engine::domain::table::TableConfig;
use baccarat_engine::engine::BaccaratEngine;
use baccarat_engine::infra::{load_table_config, DeterministicRng};

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    println!("baccarat_dev_cli: стартуем dev-CLI баккары…");

    let mut args = std::env::args().skip(1);
    let rounds: u32 = args.next().and_then(|s| s.parse().ok()).unwrap_or(10);
    let seed: u64 = args.next().and_then(|s| s.parse().ok()).unwrap_or(42);

    let config = match args.next() {
        Some(path) => match load_table_config(&path) {
            Ok(cfg) => cfg,
            Err(e) => {
                eprintln!("[CLI] ОШИБКА конфига {path}: {e}");
                return;
            }
        },
        None => TableConfig::default(),
    };

    let mut engine = match BaccaratEngine::new(config, DeterministicRng::from_seed(seed)) {
        Ok(engine) => engine,
        Err(e) => {
            eprintln!("[CLI] ОШИБКА создания стола: {e}");
            return;
        }
    };

    println!("[CLI] rounds={rounds}, seed={seed}");

    for n in 0..rounds {
        println!();
        println!("================ ROUND {} =================", n + 1);

        // Ставим руками, только если авто-повтор не сработал.
        if engine.bets().is_empty() {
            for command in opening_bets() {
                if let Err(e) = execute_command(&mut engine, command.clone()) {
                    println!("[CLI] Ставка {command:?} отклонена: {e:?}");
                }
            }
        }

        match execute_command(&mut engine, Command::StartDeal) {
            Ok(CommandResponse::RoundSettled { table, result, events }) => {
                println!("[CLI] Событий в раунде: {}", events.len());
                print_table(&table);
                let sign = if result.net < 0 { '-' } else { '+' };
                let net = result.net.unsigned_abs();
                println!(
                    "[CLI] Итог: {} | выигрыш {} | чистый результат {}{}.{:02}",
                    result.outcome,
                    result.winnings,
                    sign,
                    net / 100,
                    net % 100
                );
            }
            Ok(other) => println!("[CLI] Неожиданный ответ: {other:?}"),
            Err(e) => {
                println!("[CLI] ОШИБКА сдачи: {e:?}");
                break;
            }
        }

        if let Err(e) = execute_command(&mut engine, Command::ContinueAfterResult) {
            println!("[CLI] ОШИБКА перехода к следующему раунду: {e:?}");
            break;
        }
    }

    println!("[CLI] Завершение работы dev-CLI.");
}

fn opening_bets() -> Vec<Command> {
    vec![
        Command::SelectChip { value: 10 },
        Command::PlaceBet {
            category: BetCategory::Banker,
            amount: None,
        },
        Command::PlaceBet {
            category: BetCategory::BankerBonus,
            amount: None,
        },
        Command::PlaceBet {
            category: BetCategory::Tie,
            amount: None,
        },
        Command::SelectChip { value: 5 },
        Command::PlaceBet {
            category: BetCategory::BankerSuper,
            amount: None,
        },
    ]
}

fn print_table(table: &TableViewDto) {
    let cards = |cards: &[baccarat_engine::domain::Card]| {
        cards
            .iter()
            .map(|c| c.to_string())
            .collect::<Vec<_>>()
            .join(" ")
    };

    println!(
        "  Игрок:  [{}] = {}",
        cards(&table.player.cards),
        table.player.score
    );
    println!(
        "  Банкир: [{}] = {}",
        cards(&table.banker.cards),
        table.banker.score
    );
    println!(
        "  Ставки: B={} P={} T={} бонус={} (база {}, x{}) супер={} (база {}, x{})",
        table.bets.banker,
        table.bets.player,
        table.bets.tie,
        table.bets.banker_bonus.total,
        table.bets.banker_bonus.base,
        table
            .bets
            .banker_bonus
            .multiplier
            .map(|m| m.to_string())
            .unwrap_or_else(|| "-".into()),
        table.bets.banker_super.total,
        table.bets.banker_super.base,
        table
            .bets
            .banker_super
            .multiplier
            .map(|m| m.to_string())
            .unwrap_or_else(|| "-".into()),
    );
    println!(
        "  Баланс: {} | в шу: {}{} | история: {}",
        table.balance,
        table.shoe_remaining,
        if table.reshuffle_occurred { " (перетасовано)" } else { "" },
        table
            .history
            .outcomes
            .iter()
            .map(|o| o.short())
            .collect::<String>()
    );
}
