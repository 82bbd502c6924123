pub const APP_STYLES: &str = r#"
body {
    margin: 0;
    background-color: #f3f4f6;
    font-family: ui-sans-serif, system-ui, sans-serif;
    color: #111827;
}

.container {
    max-width: 80rem;
    margin: 0 auto;
    padding: 1rem 2rem;
}

.panel {
    background-color: #ffffff;
    border-radius: 0.5rem;
    box-shadow: 0 1px 3px rgba(0, 0, 0, 0.1);
    margin-top: 0.75rem;
    padding: 0.75rem 1.5rem;
    text-align: center;
}
"#;

pub const SUBNAV: &str = r#"
.subnav {
    display: flex;
    align-items: center;
    gap: 0.5rem;
    background-color: #ffffff;
    border-radius: 0.5rem;
    box-shadow: 0 1px 3px rgba(0, 0, 0, 0.1);
    padding: 0.75rem 1rem;
}

.subnav .prefix-hint {
    color: #6b7280;
    font-size: 0.875rem;
    white-space: nowrap;
}

.subnav form {
    flex: 1;
    display: flex;
    gap: 0.5rem;
}

.subnav input[type="text"] {
    flex: 1;
    border: 1px solid #d1d5db;
    border-radius: 0.375rem;
    padding: 0.375rem 0.75rem;
}

.subnav input[type="submit"],
.load-more button {
    border: 1px solid #d1d5db;
    border-radius: 0.375rem;
    background-color: #ffffff;
    padding: 0.5rem 0.75rem;
    font-weight: 600;
    cursor: pointer;
}

.subnav input[type="submit"]:disabled,
.load-more button:disabled {
    background-color: #e5e7eb;
    color: #6b7280;
    cursor: default;
}

.subnav .status {
    color: #6b7280;
    font-size: 0.875rem;
    white-space: nowrap;
}
"#;

pub const COLLECTION_GRID: &str = r#"
.collection-grid {
    display: grid;
    grid-template-columns: repeat(auto-fill, minmax(200px, 1fr));
    gap: 1rem 1.5rem;
}

.collection-tile a {
    text-decoration: none;
    color: inherit;
}

.collection-tile img {
    width: 100%;
    aspect-ratio: 1 / 1;
    object-fit: cover;
    border-radius: 0.5rem;
    background-color: #f3f4f6;
}

.collection-tile img:hover {
    opacity: 0.75;
}

.collection-tile .item-name {
    margin: 0.5rem 0 0;
    font-size: 0.875rem;
    font-weight: 500;
    overflow: hidden;
    text-overflow: ellipsis;
    white-space: nowrap;
}

.collection-tile .item-price {
    margin: 0;
    font-size: 0.875rem;
    color: #6b7280;
}
"#;
