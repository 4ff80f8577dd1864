use crate::config;

/// The "case files" panel listing selected projects.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum WorkPanel {
    #[default]
    Closed,
    Open,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PanelSignal {
    Open,
    Close,
}

impl WorkPanel {
    pub fn apply(self, signal: PanelSignal) -> Self {
        match signal {
            PanelSignal::Open => WorkPanel::Open,
            PanelSignal::Close => WorkPanel::Closed,
        }
    }

    pub fn is_open(self) -> bool {
        self == WorkPanel::Open
    }

    /// The "hold to see our work" hint only shows while the panel is shut.
    pub fn shows_prompt(self) -> bool {
        !self.is_open()
    }
}

/// Page sections reachable through keyboard shortcuts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Anchor {
    Services,
    Tech,
    Contact,
}

impl Anchor {
    pub fn id(self) -> &'static str {
        match self {
            Anchor::Services => "services",
            Anchor::Tech => "tech",
            Anchor::Contact => "contact",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyCommand {
    Signal(PanelSignal),
    ScrollTo(Anchor),
    Ignore,
}

const HOLD_KEY: &str = "h";

pub fn on_key_down(key: &str, panel: WorkPanel, is_mobile: bool) -> KeyCommand {
    let key = key.to_lowercase();
    match key.as_str() {
        "escape" if panel.is_open() => KeyCommand::Signal(PanelSignal::Close),
        HOLD_KEY if !is_mobile && !panel.is_open() => KeyCommand::Signal(PanelSignal::Open),
        "s" => KeyCommand::ScrollTo(Anchor::Services),
        "t" => KeyCommand::ScrollTo(Anchor::Tech),
        "c" => KeyCommand::ScrollTo(Anchor::Contact),
        _ => KeyCommand::Ignore,
    }
}

pub fn on_key_up(key: &str, panel: WorkPanel) -> KeyCommand {
    if key.eq_ignore_ascii_case(HOLD_KEY) && panel.is_open() {
        KeyCommand::Signal(PanelSignal::Close)
    } else {
        KeyCommand::Ignore
    }
}

/// A completed long-press opens the panel, on touch layouts only.
pub fn on_hold(is_mobile: bool) -> Option<PanelSignal> {
    is_mobile.then_some(PanelSignal::Open)
}

/// Lifting the finger anywhere on the page closes it again.
pub fn on_release(is_mobile: bool) -> Option<PanelSignal> {
    is_mobile.then_some(PanelSignal::Close)
}

pub fn is_mobile_width(width: f64) -> bool {
    width < config::MOBILE_BREAKPOINT_PX
}
