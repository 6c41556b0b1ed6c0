mod xclip;

pub use xclip::{ClipboardCommand, XclipClipboard};
