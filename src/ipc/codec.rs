//! Wire framing for the plugin host transport.
//!
//! Every message is a 4-byte big-endian length, a one-byte message type,
//! and a msgpack body. The length covers the type byte and the body but
//! not the prefix itself. Notification streams reuse the same framing:
//! each delivered notification is one `MSG_EVENT` frame, terminated by
//! `MSG_EVENT_END`.

use tokio::io::{AsyncReadExt, AsyncWriteExt};

/// Query or subscription request from a host client.
pub const MSG_REQUEST: u8 = 0x01;
/// Single response to a request.
pub const MSG_RESPONSE: u8 = 0x02;
/// One streamed notification on an event subscription.
pub const MSG_EVENT: u8 = 0x03;
/// End of a notification stream.
pub const MSG_EVENT_END: u8 = 0x04;
/// Error response (transport-level failure, not a `success: false` body).
pub const MSG_ERROR: u8 = 0xFF;

/// One decoded wire frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub msg_type: u8,
    pub payload: Vec<u8>,
}

impl Frame {
    pub fn new(msg_type: u8, payload: Vec<u8>) -> Self {
        Self { msg_type, payload }
    }

    /// Read the next frame from the stream.
    ///
    /// Returns `None` on clean EOF (the peer closed between frames).
    /// `max_bytes` caps the accepted frame length; zero-length frames are
    /// rejected since the type byte is mandatory.
    pub async fn read<R: AsyncReadExt + Unpin>(
        reader: &mut R,
        max_bytes: u32,
    ) -> std::io::Result<Option<Frame>> {
        let mut prefix = [0u8; 4];
        match reader.read_exact(&mut prefix).await {
            Ok(_) => {}
            Err(e) if e.kind() == std::io::ErrorKind::UnexpectedEof => return Ok(None),
            Err(e) => return Err(e),
        }

        let frame_len = u32::from_be_bytes(prefix);
        if frame_len < 1 {
            return Err(std::io::Error::new(
                std::io::ErrorKind::InvalidData,
                "frame has no type byte",
            ));
        }
        if frame_len > max_bytes {
            return Err(std::io::Error::new(
                std::io::ErrorKind::InvalidData,
                format!("frame of {} bytes exceeds limit", frame_len),
            ));
        }

        let mut body = vec![0u8; frame_len as usize];
        reader.read_exact(&mut body).await?;

        let payload = body.split_off(1);
        Ok(Some(Frame {
            msg_type: body[0],
            payload,
        }))
    }

    /// Write this frame to the stream and flush it.
    pub async fn write<W: AsyncWriteExt + Unpin>(&self, writer: &mut W) -> std::io::Result<()> {
        let frame_len = 1u32 + self.payload.len() as u32;
        writer.write_all(&frame_len.to_be_bytes()).await?;
        writer.write_all(&[self.msg_type]).await?;
        writer.write_all(&self.payload).await?;
        writer.flush().await
    }
}
