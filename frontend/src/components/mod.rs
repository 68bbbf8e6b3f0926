pub mod confetti;
pub mod history_panel;
pub mod option_form;
pub mod option_list;
pub mod spin_button;
pub mod wheel_canvas;
pub mod winner_banner;

pub use confetti::Confetti;
pub use history_panel::HistoryPanel;
pub use option_form::OptionForm;
pub use option_list::OptionList;
pub use spin_button::SpinButton;
pub use wheel_canvas::WheelCanvas;
pub use winner_banner::WinnerBanner;
