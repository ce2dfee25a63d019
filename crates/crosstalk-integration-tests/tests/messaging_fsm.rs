//! Integration tests driving the messaging hub from state-machine entities.
//!
//! These tests verify the two crates compose the way a game loop uses them:
//! states drain channel queues on their ticks, dispatch events back through
//! the hub, and the test driver performs transitions based on what the
//! states observed.

use std::cell::RefCell;
use std::rc::Rc;

use crosstalk_core::event::{Broadcast, Event, Handler};
use crosstalk_core::hub::MessagingHub;
use crosstalk_fsm::entity::Entity;
use crosstalk_fsm::state::State;

// ============================================================================
// Shared helpers
// ============================================================================

/// Game-side context every state receives: the shared hub plus a few
/// counters the tests assert on.
struct Game {
    hub: Rc<MessagingHub>,
    kills: u32,
    victory_requested: bool,
}

fn new_game() -> Game {
    let hub = Rc::new(MessagingHub::new());
    hub.create_channel("general");
    hub.create_channel("combat");
    hub.create_channel("ui");
    Game {
        hub,
        kills: 0,
        victory_requested: false,
    }
}

// ============================================================================
// Test 1: a state drains queued broadcasts and dispatches events
// ============================================================================

/// While fighting, each tick drains every "enemy_died" broadcast from the
/// combat queue, counts the kill, and pushes a "score_changed" event to the
/// UI channel carrying the running total.
struct Fighting;

impl State<Game> for Fighting {
    fn update(&mut self, game: &mut Game) {
        while game.hub.has_queue_items("combat").unwrap() {
            let msg = game.hub.dequeue_message("combat").unwrap();
            if msg.kind() == game.hub.hash("enemy_died") {
                game.kills += 1;
                game.hub
                    .dispatch_event("ui", "score_changed", &mut Event::with_payload(game.kills))
                    .unwrap();
            }
            if msg.kind() == game.hub.hash("boss_died") {
                game.victory_requested = true;
            }
        }
    }

    fn name(&self) -> &str {
        "fighting"
    }
}

#[test]
fn fighting_state_drains_queue_and_updates_score() {
    let game = new_game();
    let hub = Rc::clone(&game.hub);

    // UI side: record every score the combat logic reports.
    let scores = Rc::new(RefCell::new(Vec::new()));
    let scores_in = Rc::clone(&scores);
    hub.register_event(
        "ui",
        "score_changed",
        Rc::new(move |event: &mut Event| {
            scores_in.borrow_mut().push(*event.payload_ref::<u32>().unwrap());
        }),
    )
    .unwrap();

    // Three kills land on the combat queue before the frame runs.
    let enemy_died = hub.hash("enemy_died");
    for _ in 0..3 {
        hub.queue_message("combat", Broadcast::new(enemy_died)).unwrap();
    }

    let mut entity = Entity::new(game);
    entity.set_state(Box::new(Fighting));
    entity.update();

    assert_eq!(*scores.borrow(), vec![1, 2, 3]);
    assert_eq!(entity.context().kills, 3);
    assert!(!hub.has_queue_items("combat").unwrap());

    // A later frame with an empty queue changes nothing.
    entity.update();
    assert_eq!(*scores.borrow(), vec![1, 2, 3]);
}

// ============================================================================
// Test 2: driver-side transition based on what a state observed
// ============================================================================

struct Celebrating;

impl State<Game> for Celebrating {
    fn enter(&mut self, game: &mut Game) -> Option<Box<dyn State<Game>>> {
        game.hub
            .dispatch_event("ui", "victory_screen", &mut Event::new())
            .unwrap();
        None
    }

    fn name(&self) -> &str {
        "celebrating"
    }
}

#[test]
fn boss_death_triggers_external_transition() {
    let game = new_game();
    let hub = Rc::clone(&game.hub);

    let victory_shown = Rc::new(RefCell::new(false));
    let victory_in = Rc::clone(&victory_shown);
    hub.register_event(
        "ui",
        "victory_screen",
        Rc::new(move |_event: &mut Event| *victory_in.borrow_mut() = true),
    )
    .unwrap();

    let boss_died = hub.hash("boss_died");
    hub.queue_message("combat", Broadcast::new(boss_died)).unwrap();

    let mut entity = Entity::new(game);
    entity.set_state(Box::new(Fighting));
    entity.update();

    // The state only records the request; the driver owns the transition.
    assert!(entity.context().victory_requested);
    entity.set_state(Box::new(Celebrating));

    assert!(*victory_shown.borrow());
    assert_eq!(entity.current_state_name(), "celebrating");

    let history: Vec<String> = entity
        .machine()
        .history()
        .iter()
        .map(|s| s.name().to_string())
        .collect();
    assert_eq!(history, vec!["idle", "fighting"]);
}

// ============================================================================
// Test 3: states registering and unregistering their own handlers
// ============================================================================

/// A state that listens for "pause" events only while it is active:
/// registration happens in `enter`, unregistration in `exit`.
struct Listening {
    handler: Option<Handler>,
    paused: Rc<RefCell<u32>>,
}

impl State<Game> for Listening {
    fn enter(&mut self, game: &mut Game) -> Option<Box<dyn State<Game>>> {
        let paused = Rc::clone(&self.paused);
        let handler: Handler = Rc::new(move |_event: &mut Event| *paused.borrow_mut() += 1);
        game.hub
            .register_event("ui", "pause", Rc::clone(&handler))
            .unwrap();
        self.handler = Some(handler);
        None
    }

    fn exit(&mut self, game: &mut Game) {
        if let Some(handler) = self.handler.take() {
            game.hub.unregister_event("ui", "pause", &handler).unwrap();
        }
    }

    fn name(&self) -> &str {
        "listening"
    }
}

#[test]
fn state_scoped_handler_lifetime() {
    let game = new_game();
    let hub = Rc::clone(&game.hub);
    let paused = Rc::new(RefCell::new(0u32));

    let mut entity = Entity::new(game);
    entity.set_state(Box::new(Listening {
        handler: None,
        paused: Rc::clone(&paused),
    }));

    hub.dispatch_event("ui", "pause", &mut Event::new()).unwrap();
    assert_eq!(*paused.borrow(), 1);

    // Leaving the state tears the handler down; later pauses go unseen.
    entity.set_state(Box::new(Fighting));
    hub.dispatch_event("ui", "pause", &mut Event::new()).unwrap();
    assert_eq!(*paused.borrow(), 1);

    // The registry entry was removed cleanly, not left empty.
    let ui = hub.channel("ui").unwrap();
    assert!(ui.registered_events().is_empty());
}
