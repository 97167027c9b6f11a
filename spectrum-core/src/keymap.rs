/// Everything the keyboard can ask of the display.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    TogglePause,
    ToggleFullscreen,
    CyclePalette,
    RangeUp,
    RangeDown,
    RangeDecrease,
    RangeIncrease,
    IncrementSpectrumPercent,
    DecrementSpectrumPercent,
    IncrementAveraging,
    DecrementAveraging,
    ToggleMaxHold,
}

/// Map a DOM `KeyboardEvent.key` value to an action.
pub fn action_for_key(key: &str) -> Option<Action> {
    let action = match key {
        " " => Action::TogglePause,
        "f" => Action::ToggleFullscreen,
        "c" => Action::CyclePalette,
        "ArrowUp" => Action::RangeUp,
        "ArrowDown" => Action::RangeDown,
        "ArrowLeft" => Action::RangeDecrease,
        "ArrowRight" => Action::RangeIncrease,
        "s" => Action::IncrementSpectrumPercent,
        "w" => Action::DecrementSpectrumPercent,
        "+" => Action::IncrementAveraging,
        "-" => Action::DecrementAveraging,
        "m" => Action::ToggleMaxHold,
        _ => return None,
    };
    Some(action)
}
