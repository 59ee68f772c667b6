use axum::extract::{Extension, Json};

use crate::simulation::{Board, BoardHandle};

pub async fn find(Extension(board): Extension<BoardHandle>) -> Json<Board> {
    let board = board.lock().await.clone();

    board.into()
}
