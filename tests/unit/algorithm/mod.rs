mod triangle;
mod wild;
