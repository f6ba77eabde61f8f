//! Spawns agent requests in a background thread with status/result channels.

use std::sync::Arc;
use std::sync::mpsc;

use tokio::runtime::Runtime;
use tokio_util::sync::CancellationToken;
use uuid::Uuid;

use crate::core::agent::{self, AgentClient, AgentError};

/// Holds receivers for a send in progress: the accepted signal (endpoint took
/// the request) and the final result.
pub struct PendingSend {
    pub accepted_rx: mpsc::Receiver<()>,
    pub result_rx: mpsc::Receiver<Result<String, AgentError>>,
    /// Token to cancel the in-flight request.
    pub cancel_token: CancellationToken,
    /// Id of the user message whose status this send drives.
    pub user_id: Uuid,
    /// Id of the agent placeholder the reply fills in.
    pub agent_id: Uuid,
}

/// Spawn a new send. One send is outstanding at a time; the caller guards.
pub fn spawn_send(
    rt: &Arc<Runtime>,
    client: Arc<AgentClient>,
    text: String,
    user_id: Uuid,
    agent_id: Uuid,
) -> PendingSend {
    let (accepted_tx, accepted_rx) = mpsc::channel();
    let (result_tx, result_rx) = mpsc::channel();
    let cancel_token = CancellationToken::new();
    let cancel_token_clone = cancel_token.clone();
    let rt_clone = Arc::clone(rt);

    std::thread::spawn(move || {
        let on_accepted: agent::OnAccepted = Box::new(move || {
            let _ = accepted_tx.send(());
        });
        let result = rt_clone.block_on(client.send_message(
            &text,
            Some(on_accepted),
            Some(cancel_token_clone),
        ));
        let _ = result_tx.send(result);
    });

    PendingSend {
        accepted_rx,
        result_rx,
        cancel_token,
        user_id,
        agent_id,
    }
}
