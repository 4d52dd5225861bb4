use libgraphql_querygen::OperationKind;
use libgraphql_querygen::querygen::DocumentSink;
use libgraphql_querygen::querygen::SinkResult;
use std::path::Path;
use std::path::PathBuf;

/// Writes generated documents and indexes under a destination directory:
///
/// ```text
/// <dest_dir>/index.js
/// <dest_dir>/queries/index.js
/// <dest_dir>/queries/<field>.<ext>
/// <dest_dir>/mutations/...
/// <dest_dir>/subscriptions/...
/// ```
#[derive(Debug)]
pub(crate) struct FsDocumentSink {
    dest_dir: PathBuf,
    num_files_written: usize,
}
impl FsDocumentSink {
    fn kind_dir(&self, kind: OperationKind) -> std::io::Result<PathBuf> {
        let kind_dir = self.dest_dir.join(kind.directory_name());
        std::fs::create_dir_all(kind_dir.as_path())?;
        Ok(kind_dir)
    }

    pub(crate) fn new(dest_dir: impl AsRef<Path>) -> Self {
        Self {
            dest_dir: dest_dir.as_ref().to_path_buf(),
            num_files_written: 0,
        }
    }

    pub(crate) fn num_files_written(&self) -> usize {
        self.num_files_written
    }

    fn write_file(&mut self, path: PathBuf, content: &str) -> SinkResult {
        log::trace!("Writing {path:?}.");
        std::fs::write(path.as_path(), content)?;
        self.num_files_written += 1;
        Ok(())
    }
}
#[inherent::inherent]
impl DocumentSink for FsDocumentSink {
    pub fn write_document(
        &mut self,
        kind: OperationKind,
        field_name: &str,
        file_extension: &str,
        document: &str,
    ) -> SinkResult {
        let path = self.kind_dir(kind)?.join(format!("{field_name}.{file_extension}"));
        self.write_file(path, document)
    }

    pub fn write_kind_index(&mut self, kind: OperationKind, index: &str) -> SinkResult {
        let path = self.kind_dir(kind)?.join("index.js");
        self.write_file(path, index)
    }

    pub fn write_root_index(&mut self, index: &str) -> SinkResult {
        std::fs::create_dir_all(self.dest_dir.as_path())?;
        let path = self.dest_dir.join("index.js");
        self.write_file(path, index)
    }
}
