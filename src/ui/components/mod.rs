pub mod action_bar;
pub mod filter_panel;
pub mod notice;
pub mod skip_card;
