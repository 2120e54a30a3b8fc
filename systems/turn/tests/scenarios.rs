use std::collections::VecDeque;

use fountain_core::{
    Category, Command, DeathCause, Layout, Location, MonsterKind, Outcome,
};
use fountain_system_turn::{evaluate, Input, Output, TurnEngine, TurnState};
use fountain_world::{query, scaffolding, World};

struct Script {
    lines: VecDeque<String>,
}

impl Script {
    fn new(lines: &[&str]) -> Self {
        Self {
            lines: lines.iter().map(|line| (*line).to_owned()).collect(),
        }
    }
}

impl Input for Script {
    fn read_line(&mut self) -> Option<String> {
        self.lines.pop_front()
    }
}

#[derive(Default)]
struct Transcript {
    messages: Vec<(String, Category)>,
}

impl Transcript {
    fn contains(&self, needle: &str) -> bool {
        self.messages.iter().any(|(text, _)| text.contains(needle))
    }

    fn count(&self, needle: &str) -> usize {
        self.messages
            .iter()
            .filter(|(text, _)| text.contains(needle))
            .count()
    }
}

impl Output for Transcript {
    fn emit(&mut self, text: &str, category: Category) {
        self.messages.push((text.to_owned(), category));
    }
}

fn corridor() -> Layout {
    Layout::new(4, 4, Location::new(0, 0)).with_fountain(Location::new(0, 2))
}

fn play(layout: &Layout, lines: &[&str]) -> (World, TurnEngine, Transcript, Outcome) {
    let mut world = World::from_layout(layout).expect("valid layout");
    let mut engine = TurnEngine::new();
    let mut transcript = Transcript::default();
    let outcome = engine.run(&mut world, &mut Script::new(lines), &mut transcript);
    (world, engine, transcript, outcome)
}

#[test]
fn fountain_round_trip_wins() {
    let (world, engine, transcript, outcome) = play(
        &corridor(),
        &["move east", "move east", "enable fountain", "move west", "move west"],
    );

    assert_eq!(outcome, Outcome::Won);
    assert_eq!(engine.state(), TurnState::Won);
    assert_eq!(engine.turns_taken(), 5);
    let player = query::player(&world);
    assert_eq!(player.location, Location::new(0, 0));
    assert!(player.fountain_active);
    assert!(transcript.contains("You win!"));
    assert!(transcript.contains("5 turns"));
}

#[test]
fn invalid_input_reprompts_without_consuming_a_turn() {
    let layout = corridor()
        .with_player_start(Location::new(2, 2))
        .with_monster(MonsterKind::Amarok, Location::new(2, 2));
    let (world, engine, transcript, outcome) = play(&layout, &["dance", "MOVE UP"]);

    assert_eq!(outcome, Outcome::Abandoned);
    assert_eq!(engine.turns_taken(), 0);
    assert_eq!(query::player(&world).health, 3);
    assert_eq!(transcript.count("I don't understand"), 2);
    assert_eq!(transcript.count("What do you want to do?"), 3);
    assert!(!transcript.contains("You lose"));
}

#[test]
fn help_still_exposes_the_player_to_retaliation() {
    let layout = corridor()
        .with_player_start(Location::new(2, 2))
        .with_monster(MonsterKind::Amarok, Location::new(2, 2));
    let (_, engine, transcript, outcome) = play(&layout, &["help"]);

    assert_eq!(
        outcome,
        Outcome::Lost {
            cause: Some(DeathCause::MauledByAmarok),
        }
    );
    assert_eq!(engine.turns_taken(), 1);
    assert!(transcript.contains("enable fountain"));
    assert!(transcript.contains("mauled by an Amarok"));
}

#[test]
fn walking_into_an_amarok_loses() {
    let layout = corridor().with_monster(MonsterKind::Amarok, Location::new(1, 0));
    let (world, _, transcript, outcome) = play(&layout, &["move south", "move south"]);

    let player = query::player(&world);
    assert_eq!(player.health, 0);
    assert_eq!(player.cause_of_death, Some(DeathCause::MauledByAmarok));
    assert_eq!(
        outcome,
        Outcome::Lost {
            cause: Some(DeathCause::MauledByAmarok),
        }
    );
    assert_eq!(transcript.count("You lose"), 1);
    assert!(transcript
        .messages
        .iter()
        .any(|(text, category)| text.contains("You lose") && *category == Category::Danger));
}

#[test]
fn terminal_state_is_evaluated_once_after_every_phase() {
    let layout = corridor().with_monster(MonsterKind::Amarok, Location::new(0, 0));
    let mut world = World::from_layout(&layout).expect("valid layout");
    scaffolding::activate_fountain(&mut world);
    let mut engine = TurnEngine::new();
    let mut events = Vec::new();

    let state = engine.resolve(&mut world, Command::Help, &mut events);

    // Victory is checked before defeat.
    let player = query::player(&world);
    assert_eq!(player.health, 0);
    assert_eq!(player.cause_of_death, Some(DeathCause::MauledByAmarok));
    assert_eq!(state, TurnState::Won);
}

#[test]
fn victory_needs_activation_and_entrance_together() {
    let mut world = World::from_layout(&corridor()).expect("valid layout");
    assert_eq!(evaluate(&world), TurnState::Continue);

    scaffolding::place_player(&mut world, Location::new(0, 2));
    scaffolding::activate_fountain(&mut world);
    assert_eq!(evaluate(&world), TurnState::Continue);

    let mut unactivated = World::from_layout(&corridor()).expect("valid layout");
    scaffolding::place_player(&mut unactivated, Location::new(0, 0));
    assert_eq!(evaluate(&unactivated), TurnState::Continue);

    scaffolding::place_player(&mut world, Location::new(0, 0));
    assert_eq!(evaluate(&world), TurnState::Won);
}

#[test]
fn activation_survives_later_commands() {
    let (world, _, _, outcome) = play(
        &corridor(),
        &[
            "move east",
            "move east",
            "enable fountain",
            "move south",
            "shoot north",
            "help",
            "enable fountain",
            "move north",
        ],
    );

    assert_eq!(outcome, Outcome::Abandoned);
    assert!(query::player(&world).fountain_active);
    assert_eq!(query::player(&world).location, Location::new(0, 2));
}

#[test]
fn maelstrom_sweep_into_pit_is_fatal_in_the_same_turn() {
    // Sweep from (1, 0) lands on (0, 2) in a 4x4 grid.
    let layout = Layout::new(4, 4, Location::new(3, 3))
        .with_pit(Location::new(0, 2))
        .with_monster(MonsterKind::Maelstrom, Location::new(1, 0))
        .with_player_start(Location::new(0, 0));
    let (world, engine, transcript, outcome) = play(&layout, &["move south"]);

    assert_eq!(engine.turns_taken(), 1);
    assert_eq!(query::player(&world).location, Location::new(0, 2));
    assert_eq!(
        outcome,
        Outcome::Lost {
            cause: Some(DeathCause::FellIntoPit),
        }
    );
    assert!(transcript.contains("maelstrom sweeps you away to (Row=0, Column=2)"));
    assert!(transcript.contains("fell down a pit"));
}

#[test]
fn blocked_moves_still_face_hazards_and_retaliation() {
    let layout = corridor()
        .with_player_start(Location::new(3, 3))
        .with_monster(MonsterKind::Amarok, Location::new(3, 3));
    let (world, _, transcript, outcome) = play(&layout, &["move south"]);

    assert_eq!(query::player(&world).location, Location::new(3, 3));
    assert_eq!(transcript.count("There is a wall"), 1);
    assert!(matches!(outcome, Outcome::Lost { .. }));
}

#[test]
fn shooting_clears_the_way() {
    let layout = corridor().with_monster(MonsterKind::Amarok, Location::new(0, 1));
    let (world, _, transcript, outcome) = play(
        &layout,
        &["shoot east", "move east", "move east", "enable fountain", "move west", "move west"],
    );

    assert_eq!(outcome, Outcome::Won);
    assert_eq!(query::player(&world).arrows, 4);
    assert!(transcript.contains("slain"));
    assert!(!query::monster_view(&world).into_vec()[0].is_alive());
}

#[test]
fn senses_are_reported_before_the_prompt() {
    let layout = corridor().with_pit(Location::new(1, 1));
    let (_, _, transcript, _) = play(&layout, &[]);

    let texts: Vec<&str> = transcript
        .messages
        .iter()
        .map(|(text, _)| text.as_str())
        .collect();
    let status = texts
        .iter()
        .position(|text| text.starts_with("You are in the room at (Row=0, Column=0)"))
        .expect("room status");
    let draft = texts
        .iter()
        .position(|text| text.contains("draft"))
        .expect("pit sense");
    let prompt = texts
        .iter()
        .position(|text| text.contains("What do you want to do?"))
        .expect("prompt");
    assert!(status < draft && draft < prompt);
}

#[test]
fn finished_sessions_do_not_prompt_again() {
    let layout = corridor().with_monster(MonsterKind::Amarok, Location::new(0, 1));
    let mut world = World::from_layout(&layout).expect("valid layout");
    let mut engine = TurnEngine::new();
    let mut transcript = Transcript::default();
    let mut script = Script::new(&["move east", "move east"]);

    let first = engine.play_turn(&mut world, &mut script, &mut transcript);
    let prompts = transcript.count("What do you want to do?");
    let second = engine.play_turn(&mut world, &mut script, &mut transcript);

    assert!(matches!(first, Some(Outcome::Lost { .. })));
    assert_eq!(first, second);
    assert_eq!(transcript.count("What do you want to do?"), prompts);
    assert_eq!(script.lines.len(), 1);
}

#[test]
fn each_turn_narrates_only_its_own_events() {
    let (world, engine, transcript, _) = play(&corridor(), &["move north", "move east", "move east"]);

    assert_eq!(engine.turns_taken(), 3);
    assert_eq!(query::player(&world).location, Location::new(0, 2));
    assert_eq!(transcript.count("There is a wall"), 1);
}
