use std::net::SocketAddr;
use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tokio::net::TcpListener;
use tracing::{info, warn};
use uuid::Uuid;

use deckhand_core::{Card, CardView, Deck, DeckId, DeckSummary, DeckView, ParseCardError};

use crate::store::{DeckStore, MemoryDeckStore};

mod store;

/// 监听端口可以用 DECKHAND_PORT 覆盖。
const DEFAULT_PORT: u16 = 8000;

/// 服务器全局状态。注册表以接口注入，换存储实现不动路由层。
#[derive(Clone)]
struct AppState {
    decks: Arc<dyn DeckStore>,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let state = AppState {
        decks: Arc::new(MemoryDeckStore::new()),
    };

    let app = Router::new()
        .route("/create", get(create_deck))
        .route("/open/{deck_id}", get(open_deck))
        .route("/draw/{deck_id}", get(draw_cards))
        .with_state(state);

    let port = std::env::var("DECKHAND_PORT")
        .ok()
        .and_then(|raw| raw.parse().ok())
        .unwrap_or(DEFAULT_PORT);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    info!("牌库服务器正在监听 {}", addr);

    axum::serve(TcpListener::bind(addr).await.unwrap(), app)
        .await
        .unwrap();
}

// --- 错误到 HTTP 的映射 ---

/// 边界层错误，负责把引擎的失败折算成客户端应答。
#[derive(Debug, Error)]
enum ApiError {
    #[error(transparent)]
    BadCard(#[from] ParseCardError),
    #[error("`{0}` is not a valid deck id")]
    InvalidDeckId(String),
    #[error("deck {0} not found")]
    DeckNotFound(DeckId),
}

/// 错误应答的 JSON 载体。
#[derive(Debug, Serialize, Deserialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self {
            ApiError::BadCard(_) | ApiError::InvalidDeckId(_) => StatusCode::BAD_REQUEST,
            ApiError::DeckNotFound(_) => StatusCode::NOT_FOUND,
        };
        warn!("请求被拒绝: {}", self);
        let body = ErrorBody {
            error: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

/// 路径里的牌库标识必须是合法 UUID，其他一概拒绝。
fn parse_deck_id(raw: &str) -> Result<DeckId, ApiError> {
    Uuid::parse_str(raw).map_err(|_| ApiError::InvalidDeckId(raw.to_string()))
}

// --- 请求参数 ---

#[derive(Debug, Deserialize)]
struct CreateParams {
    /// 逗号分隔的短代码牌单；缺省或为空表示标准 52 张。
    cards: Option<String>,
    /// 为 true 时建库后立即洗牌。
    shuffled: Option<bool>,
}

#[derive(Debug, Deserialize)]
struct DrawParams {
    /// 抽牌张数。缺省或不是数字时按 1 处理，这不算错误。
    count: Option<String>,
}

// --- 路由处理 ---

/// GET /create?cards=AS,KD,2C&shuffled=true
///
/// 整份牌单解析通过才建库，任何一个代码非法都让整个请求失败，
/// 注册表里不会留下半副牌。
async fn create_deck(
    State(state): State<AppState>,
    Query(params): Query<CreateParams>,
) -> Result<Json<DeckSummary>, ApiError> {
    let mut deck = match params.cards.as_deref() {
        None | Some("") => Deck::standard(),
        Some(raw) => {
            let cards = raw
                .split(',')
                .map(Card::from_code)
                .collect::<Result<Vec<Card>, ParseCardError>>()?;
            Deck::new(cards)
        }
    };

    if params.shuffled.unwrap_or(false) {
        deck.shuffle();
    }

    let summary = DeckSummary::from(&deck);
    info!("创建牌库 {}，共 {} 张", deck.id, deck.remaining());
    state.decks.put(deck);
    Ok(Json(summary))
}

/// GET /open/{deck_id}
async fn open_deck(
    State(state): State<AppState>,
    Path(deck_id): Path<String>,
) -> Result<Json<DeckView>, ApiError> {
    let deck_id = parse_deck_id(&deck_id)?;
    let deck = state
        .decks
        .get(&deck_id)
        .ok_or(ApiError::DeckNotFound(deck_id))?;
    Ok(Json(DeckView::from(&deck)))
}

/// GET /draw/{deck_id}?count=3
///
/// 在注册表内原地抽牌，读改写一步完成，返回按抽出顺序排列的
/// 牌面视图，最先离开牌库的顶牌在最前。
async fn draw_cards(
    State(state): State<AppState>,
    Path(deck_id): Path<String>,
    Query(params): Query<DrawParams>,
) -> Result<Json<Vec<CardView>>, ApiError> {
    let deck_id = parse_deck_id(&deck_id)?;
    let count = params
        .count
        .as_deref()
        .and_then(|raw| raw.parse::<i64>().ok())
        .unwrap_or(1);

    let mut drawn = Vec::new();
    state
        .decks
        .modify(&deck_id, &mut |deck| drawn = deck.draw(count))
        .ok_or(ApiError::DeckNotFound(deck_id))?;

    info!("牌库 {} 抽出 {} 张", deck_id, drawn.len());
    Ok(Json(drawn.into_iter().map(CardView::from).collect()))
}
