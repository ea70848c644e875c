use super::{ApiError, BackendConfig, BackendStatus, BuildSummary, ChunkRecommendation, QueryAnswer};
use crate::files;
use crate::session::models::{IngestionConfig, SelectedFile};
use futures::StreamExt;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, Response};
use serde::{Deserialize, Serialize};
use std::io::Write;
use std::path::Path;

#[derive(Serialize)]
struct QueryRequest {
    prompt: String,
    llm_model: String,
    top_k: u32,
}

#[derive(Deserialize)]
struct QueryResponse {
    answer: AnswerEnvelope,
    #[serde(default)]
    retrieved_chunks: Vec<String>,
}

#[derive(Deserialize)]
struct AnswerEnvelope {
    message: AnswerMessage,
}

#[derive(Deserialize)]
struct AnswerMessage {
    content: String,
}

#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

/// Pull the server-supplied detail out of a failed response, falling back to
/// the raw body text.
async fn api_error(resp: Response) -> ApiError {
    let status = resp.status().as_u16();
    let text = resp.text().await.unwrap_or_default();
    let message = serde_json::from_str::<ErrorBody>(&text)
        .map(|b| b.error)
        .unwrap_or(text);
    ApiError::Api { status, message }
}

fn file_part(file: &SelectedFile) -> Result<Part, ApiError> {
    let bytes = std::fs::read(&file.path)?;
    let part = Part::bytes(bytes)
        .file_name(file.file_name.clone())
        .mime_str(files::mime_type(Path::new(&file.path)))?;
    Ok(part)
}

/// Send the selected files for ingestion. Chunking and embedding parameters
/// travel as query parameters, the files and OCR language as a multipart body.
pub async fn build_db(
    config: &BackendConfig,
    files: &[SelectedFile],
    params: &IngestionConfig,
) -> Result<BuildSummary, ApiError> {
    let client = Client::new();

    let mut form = Form::new().text("ocr_lang", params.ocr_language.clone());
    for file in files {
        form = form.part("files", file_part(file)?);
    }

    let resp = client
        .post(format!("{}/build_db/", config.base_url))
        .query(&[
            ("chunk_size", params.chunk_size.to_string()),
            ("chunk_overlap", params.chunk_overlap.to_string()),
            ("embedding_model", params.embedding_model.clone()),
        ])
        .multipart(form)
        .send()
        .await?;

    if !resp.status().is_success() {
        return Err(api_error(resp).await);
    }

    let summary: BuildSummary = resp.json().await?;
    Ok(summary)
}

pub async fn recommend_chunk_settings(
    config: &BackendConfig,
    files: &[SelectedFile],
) -> Result<ChunkRecommendation, ApiError> {
    let client = Client::new();

    let mut form = Form::new();
    for file in files {
        form = form.part("files", file_part(file)?);
    }

    let resp = client
        .post(format!("{}/recommend_chunk_settings/", config.base_url))
        .multipart(form)
        .send()
        .await?;

    if !resp.status().is_success() {
        return Err(api_error(resp).await);
    }

    let recommendation: ChunkRecommendation = resp.json().await?;
    Ok(recommendation)
}

pub async fn query(
    config: &BackendConfig,
    prompt: &str,
    llm_model: &str,
    top_k: u32,
) -> Result<QueryAnswer, ApiError> {
    let client = Client::new();

    let body = QueryRequest {
        prompt: prompt.to_string(),
        llm_model: llm_model.to_string(),
        top_k,
    };

    let resp = client
        .post(format!("{}/query/", config.base_url))
        .header("Content-Type", "application/json")
        .json(&body)
        .send()
        .await?;

    if !resp.status().is_success() {
        return Err(api_error(resp).await);
    }

    let data: QueryResponse = resp.json().await?;
    Ok(QueryAnswer {
        content: data.answer.message.content,
        sources: data.retrieved_chunks,
    })
}

/// Stream the exported knowledge-base archive into `dest`. Returns the number
/// of bytes written.
pub async fn download_db(config: &BackendConfig, dest: &Path) -> Result<u64, ApiError> {
    let client = Client::new();

    let resp = client
        .get(format!("{}/download_db/", config.base_url))
        .send()
        .await?;

    if !resp.status().is_success() {
        return Err(api_error(resp).await);
    }

    let mut file = std::fs::File::create(dest)?;
    let mut stream = resp.bytes_stream();
    let mut written = 0u64;

    while let Some(chunk) = stream.next().await {
        let chunk = chunk?;
        file.write_all(&chunk)?;
        written += chunk.len() as u64;
    }

    Ok(written)
}

/// Upload a previously exported archive to restore the backend's state.
pub async fn upload_db(config: &BackendConfig, archive: &Path) -> Result<(), ApiError> {
    let client = Client::new();

    let bytes = std::fs::read(archive)?;
    let file_name = archive
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("vector_db.zip")
        .to_string();
    let form = Form::new().part(
        "file",
        Part::bytes(bytes)
            .file_name(file_name)
            .mime_str("application/zip")?,
    );

    let resp = client
        .post(format!("{}/upload_db/", config.base_url))
        .multipart(form)
        .send()
        .await?;

    if !resp.status().is_success() {
        return Err(api_error(resp).await);
    }

    Ok(())
}

pub async fn status(config: &BackendConfig) -> Result<BackendStatus, ApiError> {
    let client = Client::new();

    let resp = client
        .get(format!("{}/status/", config.base_url))
        .send()
        .await?;

    if !resp.status().is_success() {
        return Err(api_error(resp).await);
    }

    let status: BackendStatus = resp.json().await?;
    Ok(status)
}
