//! Built-in document shown when nothing has been stored yet

pub const SAMPLE_DOCUMENT: &str = r#"# Markdown Editor Sample

Welcome! This editor renders a live preview next to your source, with syntax
highlighting, math formulas, Mermaid diagrams and a generated table of contents.

[TOC]

## Text Styles

This is **bold text**, this is *italic text*, and this is ~~strikethrough~~.

You can combine them: ***bold italic***

## Lists

### Unordered List
- First item
- Second item
  - Sub item 2.1
  - Sub item 2.2
- Third item

### Ordered List
1. Step one
2. Step two
3. Step three

### Task List
- [x] A finished task
- [ ] A pending task
- [ ] Another pending task

## Links and Quotes

Here is a [link example](https://github.com).

> This is a quote.
>
> Quotes can span several paragraphs.

## Code

### Inline Code
Use `console.log()` to print output.

### Code Blocks

```javascript
function fibonacci(n) {
  if (n <= 1) return n;
  return fibonacci(n - 1) + fibonacci(n - 2);
}

console.log(fibonacci(10)); // 55
```

```python
def hello_world():
    print("Hello, World!")

hello_world()
```

## Tables

| Feature | Supported | Notes |
|---------|-----------|-------|
| Markdown | ✅ | Core syntax |
| Code highlighting | ✅ | Many languages |
| Math | ✅ | KaTeX |
| Mermaid | ✅ | Flowcharts and more |

## Math

### Inline Math
Mass-energy equivalence: $E = mc^2$

Pythagorean theorem: $a^2 + b^2 = c^2$

### Display Math

$$
\frac{-b \pm \sqrt{b^2 - 4ac}}{2a}
$$

$$
\sum_{i=1}^{n} i = \frac{n(n+1)}{2}
$$

## Mermaid Diagrams

### Flowchart
```mermaid
graph TD
    A[Start] --> B{Condition}
    B -->|Yes| C[Do something]
    B -->|No| D[Skip]
    C --> E[End]
    D --> E
```

### Sequence Diagram
```mermaid
sequenceDiagram
    participant User
    participant Frontend
    participant Backend
    User->>Frontend: Send request
    Frontend->>Backend: API call
    Backend-->>Frontend: Return data
    Frontend-->>User: Show result
```

## Images

![Sample image](https://via.placeholder.com/400x200?text=Markdown+Editor)

---

## Tips

- Content is saved automatically
- Use the toolbar to insert Markdown syntax quickly
- Local images are embedded as data URLs
- Download your document as a .md file
- Add the TOC marker on its own line to show the table of contents
- Both panes scroll together

**Start writing!** 🚀
"#;
