//! FTP relay: push a local file to a remote server or pull one down.
//! A fresh connection is made per request and closed afterwards. suppaftp's
//! client is blocking, so transfers run under spawn_blocking.
//!
//! Local-path problems are the caller's fault (400); only failures talking
//! to the remote server map to 502. The local file is checked before dialing
//! so a bad request never opens a connection.

use crate::error::AppError;
use crate::model::TransferRequest;
use suppaftp::types::FileType;
use suppaftp::FtpStream;

pub struct TransferService;

impl TransferService {
    /// STOR the local file at the remote path. Returns bytes written.
    pub async fn upload(req: TransferRequest) -> Result<u64, AppError> {
        tokio::task::spawn_blocking(move || -> Result<u64, AppError> {
            let mut local = std::fs::File::open(&req.local_path)
                .map_err(|e| local_path_error(&req.local_path, &e))?;
            let mut ftp = connect(&req)?;
            let written = ftp.put_file(&req.remote_path, &mut local)?;
            ftp.quit()?;
            Ok(written)
        })
        .await?
    }

    /// RETR the remote path into the local file. Returns bytes written.
    pub async fn download(req: TransferRequest) -> Result<u64, AppError> {
        tokio::task::spawn_blocking(move || -> Result<u64, AppError> {
            let mut ftp = connect(&req)?;
            let buffer = ftp.retr_as_buffer(&req.remote_path)?;
            let bytes = buffer.into_inner();
            std::fs::write(&req.local_path, &bytes)
                .map_err(|e| local_path_error(&req.local_path, &e))?;
            ftp.quit()?;
            Ok(bytes.len() as u64)
        })
        .await?
    }
}

fn connect(req: &TransferRequest) -> Result<FtpStream, AppError> {
    let mut ftp = FtpStream::connect((req.server.as_str(), req.port))?;
    ftp.login(&req.user, &req.pass)?;
    ftp.transfer_type(FileType::Binary)?;
    Ok(ftp)
}

fn local_path_error(path: &str, e: &std::io::Error) -> AppError {
    AppError::BadRequest(format!("local path {}: {}", path, e))
}
