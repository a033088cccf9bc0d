//! Redux store and slice renderers

use super::join_lines;
use crate::config::ProjectConfig;

/// Slice identity depends on authentication: an auth-aware user slice, or a
/// demo counter slice otherwise.
fn slice_name(config: &ProjectConfig) -> (&'static str, &'static str) {
    if config.authentication {
        ("userSlice", "user")
    } else {
        ("counterSlice", "counter")
    }
}

/// `src/store/store.{jsx,tsx}` - configureStore, optionally persist-wrapped
pub fn store(config: &ProjectConfig) -> String {
    let (slice, key) = slice_name(config);
    let mut lines: Vec<String> = vec!["import { configureStore } from '@reduxjs/toolkit';".into()];
    if config.persist {
        lines.push("import { persistStore, persistReducer } from 'redux-persist';".into());
        lines.push("import storage from 'redux-persist/lib/storage';".into());
    }
    lines.push(format!("import {} from './{}';", slice, slice));
    lines.push(String::new());

    if config.persist {
        lines.push("const persistConfig = { key: 'root', storage };".into());
        lines.push(String::new());
    }

    lines.push("const rootReducer = {".into());
    if config.persist {
        lines.push(format!(
            "  {}: persistReducer(persistConfig, {}),",
            key, slice
        ));
    } else {
        lines.push(format!("  {}: {},", key, slice));
    }
    lines.extend([
        "};".into(),
        String::new(),
        "export const store = configureStore({".into(),
        "  reducer: rootReducer,".into(),
        "  middleware: (getDefaultMiddleware) => getDefaultMiddleware({ serializableCheck: false }),".into(),
        "});".into(),
    ]);
    if config.persist {
        lines.push(String::new());
        lines.push("export const persistor = persistStore(store);".into());
    }
    join_lines(&lines)
}

/// `src/store/userSlice.{jsx,tsx}` - auth-aware state slice
pub fn user_slice(_config: &ProjectConfig) -> String {
    let lines: Vec<String> = vec![
        "import { createSlice } from '@reduxjs/toolkit';".into(),
        String::new(),
        "const userSlice = createSlice({".into(),
        "  name: 'user',".into(),
        "  initialState: {".into(),
        "    id: null,".into(),
        "    isAuthenticated: false,".into(),
        "  },".into(),
        "  reducers: {".into(),
        "    setUser: (state, action) => {".into(),
        "      state.id = action.payload.id;".into(),
        "      state.isAuthenticated = true;".into(),
        "    },".into(),
        "    clearUser: (state) => {".into(),
        "      state.id = null;".into(),
        "      state.isAuthenticated = false;".into(),
        "    },".into(),
        "  },".into(),
        "});".into(),
        String::new(),
        "export const { setUser, clearUser } = userSlice.actions;".into(),
        "export default userSlice.reducer;".into(),
    ];
    join_lines(&lines)
}

/// `src/store/counterSlice.{jsx,tsx}` - demo slice for non-auth projects
pub fn counter_slice(_config: &ProjectConfig) -> String {
    let lines: Vec<String> = vec![
        "import { createSlice } from '@reduxjs/toolkit';".into(),
        String::new(),
        "const counterSlice = createSlice({".into(),
        "  name: 'counter',".into(),
        "  initialState: {".into(),
        "    value: 0,".into(),
        "  },".into(),
        "  reducers: {".into(),
        "    increment: (state) => {".into(),
        "      state.value += 1;".into(),
        "    },".into(),
        "    decrement: (state) => {".into(),
        "      state.value -= 1;".into(),
        "    },".into(),
        "    incrementByAmount: (state, action) => {".into(),
        "      state.value += action.payload;".into(),
        "    },".into(),
        "  },".into(),
        "});".into(),
        String::new(),
        "export const { increment, decrement, incrementByAmount } = counterSlice.actions;".into(),
        "export default counterSlice.reducer;".into(),
    ];
    join_lines(&lines)
}
