use std::sync::Arc;

use broadside::store::InMemoryStore;
use broadside::{
    init_logging, validate_fleet, GameServer, SessionEvent, SessionFeed, ShipSubmission,
};
use clap::Parser;
use tokio::time::Duration;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Parser)]
enum Commands {
    /// Play a complete scripted match through the engine and print both
    /// players' event feeds.
    Simulate,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Simulate => simulate().await,
    }
}

/// Two of each kind, one ship per row, all packed against column 1.
fn demo_fleet() -> Vec<ShipSubmission> {
    [
        ("carrier", "a1"),
        ("carrier", "b1"),
        ("battleship", "c1"),
        ("battleship", "d1"),
        ("sub", "e1"),
        ("sub", "f1"),
        ("cruiser", "g1"),
        ("cruiser", "h1"),
        ("patrol", "i1"),
        ("patrol", "j1"),
    ]
    .into_iter()
    .map(|(kind, origin)| ShipSubmission::new(kind, origin, "horizontal"))
    .collect()
}

/// Every cell the demo fleet occupies, row by row.
fn demo_fleet_cells() -> Vec<String> {
    let rows = [
        ('a', 5),
        ('b', 5),
        ('c', 4),
        ('d', 4),
        ('e', 3),
        ('f', 3),
        ('g', 2),
        ('h', 2),
        ('i', 1),
        ('j', 1),
    ];
    let mut cells = Vec::new();
    for (row, len) in rows {
        for col in 1..=len {
            cells.push(format!("{row}{col}"));
        }
    }
    cells
}

/// Columns 6-10 are empty in the demo layout on every row.
fn open_water() -> Vec<String> {
    let mut cells = Vec::new();
    for row in 'a'..='j' {
        for col in 6..=10 {
            cells.push(format!("{row}{col}"));
        }
    }
    cells
}

fn watch_feed(label: &'static str, mut feed: SessionFeed) {
    tokio::spawn(async move {
        while let Some(event) = feed.next().await {
            match event {
                SessionEvent::Started { turn, .. } => {
                    println!("[{label}] the game has started, player {turn} to move");
                }
                SessionEvent::ShipHit {
                    kind, cell, sunk, ..
                } => {
                    if sunk {
                        println!("[{label}] your {kind} has been sunk ({cell})");
                    } else {
                        println!("[{label}] your {kind} has been hit at {cell}");
                    }
                }
                SessionEvent::TurnChanged { .. } => {}
                SessionEvent::Ended { winner } => {
                    println!("[{label}] the game has ended, winner: player {winner}");
                }
            }
        }
    });
}

async fn simulate() -> anyhow::Result<()> {
    let store = Arc::new(InMemoryStore::new());
    let server = GameServer::new(store);

    let alice = server
        .register_player("Alice", None)
        .await
        .map_err(|e| anyhow::anyhow!(e))?;
    let bob = server
        .register_player("Bob", None)
        .await
        .map_err(|e| anyhow::anyhow!(e))?;

    let fleet = validate_fleet(&demo_fleet()).map_err(|e| anyhow::anyhow!(e))?;
    server
        .join_session(alice.id, fleet.clone())
        .await
        .map_err(|e| anyhow::anyhow!(e))?;
    let session = server
        .join_session(bob.id, fleet)
        .await
        .map_err(|e| anyhow::anyhow!(e))?;

    let alice_feed = server
        .subscribe(alice.id, session.id)
        .await
        .map_err(|e| anyhow::anyhow!(e))?;
    let bob_feed = server
        .subscribe(bob.id, session.id)
        .await
        .map_err(|e| anyhow::anyhow!(e))?;
    watch_feed("alice", alice_feed);
    watch_feed("bob", bob_feed);

    // Alice walks Bob's fleet cell by cell; Bob returns fire into open
    // water. First mover is the session creator, so Alice starts.
    let decoys = open_water();
    for (target, decoy) in demo_fleet_cells().iter().zip(&decoys) {
        let outcome = server
            .fire_shot(alice.id, session.id, target)
            .await
            .map_err(|e| anyhow::anyhow!(e))?;
        match (outcome.hit, outcome.sunk) {
            (Some(kind), None) => println!("alice fires {target}: hit {kind}"),
            (Some(kind), Some(_)) => println!("alice fires {target}: sunk {kind}"),
            _ => println!("alice fires {target}: miss"),
        }
        if outcome.won {
            println!("alice wins!");
            break;
        }

        let outcome = server
            .fire_shot(bob.id, session.id, decoy)
            .await
            .map_err(|e| anyhow::anyhow!(e))?;
        debug_assert!(outcome.hit.is_none());
        println!("bob fires {decoy}: miss");
    }

    // Give the feed tasks a moment to drain before exiting.
    tokio::time::sleep(Duration::from_millis(50)).await;
    Ok(())
}
