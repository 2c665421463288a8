//! Download of the Java client jar from the binary repository.

use std::fs;
use std::path::{Path, PathBuf};

use crate::artifact::{ArtifactCoordinates, ArtifactVersion};
use crate::error::{CiError, Result};

/// Source of artifact bytes.
///
/// Split out from [`fetch_artifact`] so the download path can be exercised
/// without a network.
pub trait ArtifactClient {
    /// Issue a single GET for `url` and return the full response body.
    fn get(&self, url: &str) -> Result<Vec<u8>>;
}

/// Blocking reqwest client using the library's default timeouts.
pub struct HttpArtifactClient {
    http: reqwest::blocking::Client,
}

impl HttpArtifactClient {
    pub fn new() -> Result<Self> {
        let http = reqwest::blocking::Client::builder().build()?;
        Ok(HttpArtifactClient { http })
    }
}

impl ArtifactClient for HttpArtifactClient {
    fn get(&self, url: &str) -> Result<Vec<u8>> {
        let resp = self.http.get(url).send()?;

        let status = resp.status();
        if !status.is_success() {
            return Err(CiError::http_status(format!("GET {} returned {}", url, status)));
        }

        Ok(resp.bytes()?.to_vec())
    }
}

/// Downloads the jar for `version` into `output_dir/file_name`.
///
/// The request is completed before anything touches the filesystem, so a
/// failed download leaves no directory or file behind. An existing file is
/// overwritten.
///
/// # Returns
/// * `Ok(PathBuf)` - Path of the written jar
/// * `Err` - If the request fails or the file cannot be written
pub fn fetch_artifact<C: ArtifactClient>(
    client: &C,
    coordinates: &ArtifactCoordinates,
    version: &ArtifactVersion,
    output_dir: &Path,
    file_name: &str,
) -> Result<PathBuf> {
    let url = coordinates.url_for(version);
    let body = client.get(&url)?;

    fs::create_dir_all(output_dir)?;
    let target = output_dir.join(file_name);
    fs::write(&target, &body)?;

    Ok(target)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ArtifactConfig;
    use std::cell::RefCell;
    use std::io::{BufRead, BufReader, Write};
    use std::net::TcpListener;
    use std::thread::{self, JoinHandle};
    use tempfile::TempDir;

    /// Answers a single request with `status_line` and an empty body
    fn serve_once(status_line: &'static str) -> (String, JoinHandle<()>) {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let base_url = format!("http://{}/artifactory", listener.local_addr().unwrap());

        let handle = thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            let mut reader = BufReader::new(stream.try_clone().unwrap());
            let mut line = String::new();
            while reader.read_line(&mut line).unwrap() > 0 && line != "\r\n" {
                line.clear();
            }
            write!(
                stream,
                "{}\r\nContent-Length: 0\r\nConnection: close\r\n\r\n",
                status_line
            )
            .unwrap();
            stream.flush().unwrap();
        });

        (base_url, handle)
    }

    struct RecordingClient {
        body: Vec<u8>,
        requested: RefCell<Vec<String>>,
    }

    impl ArtifactClient for RecordingClient {
        fn get(&self, url: &str) -> Result<Vec<u8>> {
            self.requested.borrow_mut().push(url.to_string());
            Ok(self.body.clone())
        }
    }

    struct FailingClient;

    impl ArtifactClient for FailingClient {
        fn get(&self, _url: &str) -> Result<Vec<u8>> {
            Err(CiError::http("connection refused"))
        }
    }

    #[test]
    fn test_fetch_writes_body_and_creates_directory() {
        let temp_dir = TempDir::new().unwrap();
        let output_dir = temp_dir.path().join("build");
        let client = RecordingClient {
            body: b"PK\x03\x04jar".to_vec(),
            requested: RefCell::new(Vec::new()),
        };
        let version = ArtifactVersion::parse("1.0.0").unwrap();

        let target = fetch_artifact(
            &client,
            &ArtifactConfig::default().coordinates(),
            &version,
            &output_dir,
            "java-client-library.jar",
        )
        .unwrap();

        assert_eq!(target, output_dir.join("java-client-library.jar"));
        assert_eq!(fs::read(&target).unwrap(), b"PK\x03\x04jar");
        let requested = client.requested.borrow();
        assert_eq!(requested.len(), 1);
        assert!(requested[0].contains("neptune-java-client-release"));
    }

    #[test]
    fn test_fetch_overwrites_existing_file() {
        let temp_dir = TempDir::new().unwrap();
        let output_dir = temp_dir.path().join("build");
        fs::create_dir_all(&output_dir).unwrap();
        fs::write(output_dir.join("java-client-library.jar"), b"stale content, longer").unwrap();

        let client = RecordingClient {
            body: b"fresh".to_vec(),
            requested: RefCell::new(Vec::new()),
        };
        let version = ArtifactVersion::parse("1.0.0-SNAPSHOT").unwrap();

        let target = fetch_artifact(
            &client,
            &ArtifactConfig::default().coordinates(),
            &version,
            &output_dir,
            "java-client-library.jar",
        )
        .unwrap();

        assert_eq!(fs::read(target).unwrap(), b"fresh");
    }

    #[test]
    fn test_failed_fetch_creates_nothing() {
        let temp_dir = TempDir::new().unwrap();
        let output_dir = temp_dir.path().join("build");
        let version = ArtifactVersion::parse("1.0.0").unwrap();

        let result = fetch_artifact(
            &FailingClient,
            &ArtifactConfig::default().coordinates(),
            &version,
            &output_dir,
            "java-client-library.jar",
        );

        assert!(matches!(result, Err(CiError::Http(_))));
        assert!(!output_dir.exists());
    }

    #[test]
    fn test_http_client_connection_refused() {
        let client = HttpArtifactClient::new().unwrap();
        // Port 1 on loopback is not expected to accept connections
        let result = client.get("http://127.0.0.1:1/artifactory/x.jar");
        assert!(matches!(result, Err(CiError::Http(_))));
    }

    #[test]
    fn test_not_found_status_creates_nothing() {
        let (base_url, server) = serve_once("HTTP/1.1 404 Not Found");
        let temp_dir = TempDir::new().unwrap();
        let output_dir = temp_dir.path().join("build");
        let mut coordinates = ArtifactConfig::default().coordinates();
        coordinates.base_url = base_url;
        let version = ArtifactVersion::parse("1.0").unwrap();

        let result = fetch_artifact(
            &HttpArtifactClient::new().unwrap(),
            &coordinates,
            &version,
            &output_dir,
            "java-client-library.jar",
        );
        server.join().unwrap();

        match result {
            Err(CiError::HttpStatus(msg)) => {
                assert!(msg.contains("404"), "unexpected message: {}", msg);
                assert!(msg.contains("neptune-client-library-uberjar-1.0.jar"));
            }
            other => panic!("expected a status error, got {:?}", other),
        }
        assert!(!output_dir.exists());
    }
}
