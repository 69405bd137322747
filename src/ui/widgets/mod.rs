pub mod emoji_row;
