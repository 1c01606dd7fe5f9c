//! # 牌库引擎核心库
//!
//! 这个 crate 包含标准 52 张扑克牌库的全部领域逻辑：点数、花色、
//! 牌面编码，牌库的构造、洗牌、顺序检测与抽牌，以及暴露给边界层
//! 的传输视图。它不做任何 I/O，也不关心牌库注册表或路由，可以被
//! 任何上层服务复用。

mod card;
mod deck;
mod view;

pub use card::*;

pub use deck::*;

pub use view::*;
