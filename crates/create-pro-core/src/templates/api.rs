//! API client renderers - exactly one of the two is ever generated

use super::join_lines;
use crate::config::{ApiHandler, ProjectConfig};

/// `src/api/api.{jsx,tsx}` - dispatch on the configured handler
pub fn api_client(config: &ProjectConfig) -> String {
    match config.api_handler {
        ApiHandler::Axios => axios_client(config),
        ApiHandler::Fetch => fetch_client(config),
    }
}

/// Axios instance with token and 401 interceptors
pub fn axios_client(_config: &ProjectConfig) -> String {
    let lines: Vec<String> = vec![
        "import axios from 'axios';".into(),
        String::new(),
        "const api = axios.create({".into(),
        "  baseURL: 'https://api.example.com',".into(),
        "  timeout: 10000,".into(),
        "});".into(),
        String::new(),
        "api.interceptors.request.use(".into(),
        "  (config) => {".into(),
        "    const token = localStorage.getItem('token');".into(),
        "    if (token) {".into(),
        "      config.headers.Authorization = `Bearer ${token}`;".into(),
        "    }".into(),
        "    return config;".into(),
        "  },".into(),
        "  (error) => Promise.reject(error)".into(),
        ");".into(),
        String::new(),
        "api.interceptors.response.use(".into(),
        "  (response) => response,".into(),
        "  (error) => {".into(),
        "    if (error.response?.status === 401) {".into(),
        "      // Handle unauthorized".into(),
        "    }".into(),
        "    return Promise.reject(error);".into(),
        "  }".into(),
        ");".into(),
        String::new(),
        "export default api;".into(),
    ];
    join_lines(&lines)
}

/// Fetch wrapper relying on the platform built-in
pub fn fetch_client(config: &ProjectConfig) -> String {
    let is_ts = config.language.is_typescript();
    let signature = if is_ts {
        "const apiFetch = async (url: string, options: RequestInit = {}) => {"
    } else {
        "const apiFetch = async (url, options = {}) => {"
    };
    let headers_decl = if is_ts {
        "  const headers: Record<string, string> = {"
    } else {
        "  const headers = {"
    };
    let lines: Vec<String> = vec![
        signature.into(),
        headers_decl.into(),
        "    'Content-Type': 'application/json',".into(),
        "  };".into(),
        String::new(),
        "  const token = localStorage.getItem('token');".into(),
        "  if (token) {".into(),
        "    headers.Authorization = `Bearer ${token}`;".into(),
        "  }".into(),
        String::new(),
        "  const response = await fetch(`https://api.example.com${url}`, {".into(),
        "    headers,".into(),
        "    ...options,".into(),
        "  });".into(),
        String::new(),
        "  if (!response.ok) {".into(),
        "    if (response.status === 401) {".into(),
        "      // Handle unauthorized".into(),
        "    }".into(),
        "    throw new Error('Network response was not ok');".into(),
        "  }".into(),
        String::new(),
        "  return response.json();".into(),
        "};".into(),
        String::new(),
        "export default apiFetch;".into(),
    ];
    join_lines(&lines)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{base_config, Language};

    #[test]
    fn exactly_one_variant_is_rendered() {
        let mut config = base_config();
        config.api_handler = ApiHandler::Axios;
        let out = api_client(&config);
        assert!(out.contains("import axios from 'axios';"));
        assert!(!out.contains("apiFetch"));

        config.api_handler = ApiHandler::Fetch;
        let out = api_client(&config);
        assert!(out.contains("const apiFetch"));
        assert!(!out.contains("axios"));
    }

    #[test]
    fn fetch_typescript_variant_types_the_wrapper() {
        let mut config = base_config();
        config.language = Language::TypeScript;
        let out = fetch_client(&config);
        assert!(out.contains("(url: string, options: RequestInit = {})"));
        assert!(out.contains("Record<string, string>"));
    }

    #[test]
    fn clients_attach_the_stored_token() {
        let config = base_config();
        assert!(axios_client(&config).contains("Bearer ${token}"));
        assert!(fetch_client(&config).contains("Bearer ${token}"));
    }
}
