/*
[INPUT]:  Board inputs and the acting user id
[OUTPUT]: Board listings and write acknowledgements
[POS]:    HTTP layer - board endpoints
[UPDATE]: When adding board endpoints or changing request bodies
*/

use reqwest::Method;

use crate::http::{Operation, Result, TaskboardClient};
use crate::types::{
    ActorRequest, Board, BoardPatch, CreateBoardRequest, DataEnvelope, EntityId, NewBoard,
    UpdateBoardRequest,
};

impl TaskboardClient {
    /// List boards visible to the session
    ///
    /// GET /boards
    pub async fn fetch_boards(&self) -> Result<Vec<Board>> {
        let builder = self.request(Method::GET, &["boards"])?;
        let envelope: DataEnvelope<Vec<Board>> =
            self.send_json(Operation::FetchBoards, builder).await?;
        Ok(envelope.data)
    }

    /// POST /boards
    pub async fn create_board(&self, board: &NewBoard, actor: &EntityId) -> Result<()> {
        let body = CreateBoardRequest::new(board, actor);
        let builder = self.request(Method::POST, &["boards"])?.json(&body);
        self.send(Operation::CreateBoard, builder).await?;
        Ok(())
    }

    /// PATCH /boards/{id}
    pub async fn update_board(&self, id: &EntityId, patch: &BoardPatch) -> Result<()> {
        let body = UpdateBoardRequest::from(patch);
        let id = id.to_string();
        let builder = self.request(Method::PATCH, &["boards", &id])?.json(&body);
        self.send(Operation::UpdateBoard, builder).await?;
        Ok(())
    }

    /// DELETE /boards/{id}
    pub async fn delete_board(&self, id: &EntityId, actor: &EntityId) -> Result<()> {
        let body = ActorRequest {
            user_id: actor.clone(),
        };
        let id = id.to_string();
        let builder = self.request(Method::DELETE, &["boards", &id])?.json(&body);
        self.send(Operation::DeleteBoard, builder).await?;
        Ok(())
    }
}
