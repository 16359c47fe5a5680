use std::path::PathBuf;

// Resultado de la asignación remota: `data` trae "Assigned: X/Y, Conflicts: Z"
#[derive(Debug, Clone, PartialEq)]
pub struct AssignmentResult {
    pub summary: String,
    pub message: Option<String>,
}

// Archivo exportado y guardado en disco
#[derive(Debug, Clone, PartialEq)]
pub struct ExportedReport {
    pub path: PathBuf,
    pub bytes_written: usize,
}
