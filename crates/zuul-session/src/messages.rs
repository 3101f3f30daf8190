//! Player-facing text.

pub(crate) const UNKNOWN_COMMAND: &str =
    "Huh? I don't understand what you're talking about...";

pub(crate) const GO_WHERE: &str = "Go where?";
pub(crate) const NO_EXIT: &str = "There's nothing there!";
pub(crate) const UNLOCKED: &str = "You unlocked the door!";
pub(crate) const LOCKED: &str =
    "That door is locked! You can unlock it with a key, though.";
pub(crate) const ONE_WAY: &str = "That way can only be taken from the other side!";

pub(crate) const MARKED: &str = "You've put this room in your memory.\n\
     Now, you can go back to this room whenever you want to with 'back'.";
pub(crate) const NO_WAYPOINT: &str = "You never bothered to remember any place...";
pub(crate) const WENT_BACK: &str = "You went back!";

pub(crate) const QUIT_WHAT: &str = "Quit what?";
pub(crate) const GAME_OVER: &str = "The game is over.";
pub(crate) const TIME_UP: &str = "Time's up - you lost!";
pub(crate) const INTERNAL_ERROR: &str = "Internal error. Please file a bug report.";

pub(crate) const HELP_INTRO: &str = "You are lost. You are alone. You wander\n\
     around at the university.\n\
     \n\
     Your command words are:";

pub(crate) fn found_key(identifier: &str) -> String {
    format!("You found a key ({identifier})!")
}

pub(crate) fn time_low(remaining: i64) -> String {
    format!("Time is running low!\nYou have {remaining}s left...")
}

pub(crate) fn won(description: &str) -> String {
    format!("You made it {description}. You win!")
}

pub(crate) fn welcome(time: i64, room: &str) -> String {
    format!(
        "\nWelcome to the World of Zuul!\n\
         World of Zuul is a new, incredibly boring adventure game.\n\
         Type 'help' if you need help.\n\
         You have {time}s to win.\n\
         \n\
         {room}"
    )
}
