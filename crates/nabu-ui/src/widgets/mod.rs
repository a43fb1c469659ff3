pub mod styled_label;
